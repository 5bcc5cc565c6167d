//! Multi-context evaluation for the Contexts showcase.
//!
//! A [`Persona`] carries two context kinds: a `user` (key, name, email, job
//! function) and an `organization` (key, name, street, city). Each persona
//! field can be switched off through [`EnabledFields`]. A [`Condition`] is a
//! conjunction of up to three equality checks over location, organization and
//! job function; it holds for a persona only when every attribute it names is
//! both enabled and equal to the required literal.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::ToSchema;

pub const LOCATIONS: [&str; 2] = ["Springfield", "Whiterun"];
pub const ORGANIZATIONS: [&str; 2] = [
    "Global Health Services",
    "Dragonsreach (Court of the Jarl of Whiterun)",
];
pub const JOB_FUNCTIONS: [&str; 3] = ["nurse", "doctor", "court wizard"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Location,
    Organization,
    JobFunction,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Location,
        Attribute::Organization,
        Attribute::JobFunction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Location => "Location",
            Attribute::Organization => "Organization",
            Attribute::JobFunction => "Job Function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub key: String,
    pub name: String,
    pub email: String,
    pub job_function: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrganizationContext {
    pub key: String,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Persona {
    pub id: String,
    pub user: UserContext,
    pub organization: OrganizationContext,
}

impl Persona {
    /// Value the persona holds for `attribute`. Location is the organization's city.
    pub fn value(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Location => &self.organization.address.city,
            Attribute::Organization => &self.organization.name,
            Attribute::JobFunction => &self.user.job_function,
        }
    }

    /// The `kind: multi` context document, leaving out every disabled field.
    pub fn multi_context(&self, enabled: &EnabledFields) -> Value {
        let mut user = Map::new();
        if enabled.user_key {
            user.insert("key".into(), json!(self.user.key));
        }
        if enabled.name {
            user.insert("name".into(), json!(self.user.name));
        }
        if enabled.email {
            user.insert("email".into(), json!(self.user.email));
        }
        if enabled.job_function {
            user.insert("jobFunction".into(), json!(self.user.job_function));
        }

        let mut address = Map::new();
        if enabled.street {
            address.insert("street".into(), json!(self.organization.address.street));
        }
        if enabled.city {
            address.insert("city".into(), json!(self.organization.address.city));
        }

        let mut organization = Map::new();
        if enabled.org_key {
            organization.insert("key".into(), json!(self.organization.key));
        }
        if enabled.organization {
            organization.insert("name".into(), json!(self.organization.name));
        }
        if !address.is_empty() {
            organization.insert("address".into(), Value::Object(address));
        }

        json!({
            "kind": "multi",
            "user": user,
            "organization": organization,
        })
    }
}

/// Per-persona field toggles. Only `job_function`, `organization` and `city`
/// gate condition evaluation; the rest shape the context document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EnabledFields {
    pub user_key: bool,
    pub name: bool,
    pub email: bool,
    pub job_function: bool,
    pub org_key: bool,
    pub organization: bool,
    pub street: bool,
    pub city: bool,
}

impl Default for EnabledFields {
    fn default() -> Self {
        Self::all()
    }
}

impl EnabledFields {
    pub fn all() -> Self {
        Self {
            user_key: true,
            name: true,
            email: true,
            job_function: true,
            org_key: true,
            organization: true,
            street: true,
            city: true,
        }
    }

    pub fn none() -> Self {
        Self {
            user_key: false,
            name: false,
            email: false,
            job_function: false,
            org_key: false,
            organization: false,
            street: false,
            city: false,
        }
    }

    pub fn allows(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Location => self.city,
            Attribute::Organization => self.organization,
            Attribute::JobFunction => self.job_function,
        }
    }

    pub fn with(mut self, attribute: Attribute, on: bool) -> Self {
        match attribute {
            Attribute::Location => self.city = on,
            Attribute::Organization => self.organization = on,
            Attribute::JobFunction => self.job_function = on,
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_function: Option<String>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match attribute {
            Attribute::Location => self.location = value,
            Attribute::Organization => self.organization = value,
            Attribute::JobFunction => self.job_function = value,
        }
        self
    }

    pub fn required(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Location => self.location.as_deref(),
            Attribute::Organization => self.organization.as_deref(),
            Attribute::JobFunction => self.job_function.as_deref(),
        }
    }

    /// Required `(attribute, literal)` pairs in location, organization, job function order.
    pub fn requirements(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(|attr| self.required(attr).map(|value| (attr, value)))
    }

    pub fn is_satisfied_by(&self, persona: &Persona, enabled: &EnabledFields) -> bool {
        self.requirements()
            .all(|(attr, value)| enabled.allows(attr) && persona.value(attr) == value)
    }

    pub fn label(&self) -> String {
        self.requirements()
            .map(|(attr, value)| format!("{}: {}", attr.label(), value))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// One result per condition, in order. Nothing selected means nothing matches.
pub fn evaluate(
    selected: Option<&Persona>,
    enabled: &EnabledFields,
    conditions: &[Condition],
) -> Vec<bool> {
    match selected {
        Some(persona) => conditions
            .iter()
            .map(|condition| condition.is_satisfied_by(persona, enabled))
            .collect(),
        None => vec![false; conditions.len()],
    }
}

/// Every non-empty attribute subset crossed with the catalogue values:
/// singles, then location+organization, location+job, organization+job,
/// then all three.
pub fn condition_matrix() -> Vec<Condition> {
    let mut conditions = Vec::new();

    for location in LOCATIONS {
        conditions.push(Condition::new().require(Attribute::Location, location));
    }
    for organization in ORGANIZATIONS {
        conditions.push(Condition::new().require(Attribute::Organization, organization));
    }
    for job in JOB_FUNCTIONS {
        conditions.push(Condition::new().require(Attribute::JobFunction, job));
    }

    for location in LOCATIONS {
        for organization in ORGANIZATIONS {
            conditions.push(
                Condition::new()
                    .require(Attribute::Location, location)
                    .require(Attribute::Organization, organization),
            );
        }
    }
    for location in LOCATIONS {
        for job in JOB_FUNCTIONS {
            conditions.push(
                Condition::new()
                    .require(Attribute::Location, location)
                    .require(Attribute::JobFunction, job),
            );
        }
    }
    for organization in ORGANIZATIONS {
        for job in JOB_FUNCTIONS {
            conditions.push(
                Condition::new()
                    .require(Attribute::Organization, organization)
                    .require(Attribute::JobFunction, job),
            );
        }
    }

    for location in LOCATIONS {
        for organization in ORGANIZATIONS {
            for job in JOB_FUNCTIONS {
                conditions.push(
                    Condition::new()
                        .require(Attribute::Location, location)
                        .require(Attribute::Organization, organization)
                        .require(Attribute::JobFunction, job),
                );
            }
        }
    }

    conditions
}

fn persona(
    id: &str,
    user: (&str, &str, &str, &str),
    org: (&str, &str, &str, &str),
) -> Persona {
    let (user_key, name, email, job_function) = user;
    let (org_key, org_name, street, city) = org;
    Persona {
        id: id.to_string(),
        user: UserContext {
            key: user_key.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            job_function: job_function.to_string(),
        },
        organization: OrganizationContext {
            key: org_key.to_string(),
            name: org_name.to_string(),
            address: Address {
                street: street.to_string(),
                city: city.to_string(),
            },
        },
    }
}

pub fn personas() -> Vec<Persona> {
    let global_health = (
        "org-key-123abc",
        ORGANIZATIONS[0],
        "123 Main Street",
        LOCATIONS[0],
    );
    vec![
        persona(
            "anna",
            ("user-key-123abc", "Anna", "anna@globalhealth.com", "doctor"),
            global_health,
        ),
        persona(
            "jesse",
            ("user-key-456def", "Jesse", "jesse@globalhealth.com", "nurse"),
            global_health,
        ),
        persona(
            "rob",
            (
                "farengar-secret-fire",
                "Farengar Secret-Fire",
                "farengar@dragonsreach.com",
                "court wizard",
            ),
            (
                "whiterun-hold",
                ORGANIZATIONS[1],
                "1 Cloud District Way",
                LOCATIONS[1],
            ),
        ),
    ]
}

pub fn find_persona(id: &str) -> Option<Persona> {
    personas()
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
}
