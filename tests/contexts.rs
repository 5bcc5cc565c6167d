use remodel_storefront_api::contexts::{
    Attribute, Condition, EnabledFields, JOB_FUNCTIONS, LOCATIONS, ORGANIZATIONS, Persona,
    condition_matrix, evaluate, find_persona, personas,
};

fn anna() -> Persona {
    find_persona("anna").expect("anna persona")
}

fn stranger() -> Persona {
    let mut persona = anna();
    persona.id = "stranger".into();
    persona.organization.address.city = "Riverwood".into();
    persona.organization.name = "Sleeping Giant Inn".into();
    persona.user.job_function = "bard".into();
    persona
}

#[test]
fn catalogue_has_three_personas() {
    let ids: Vec<String> = personas().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["anna", "jesse", "rob"]);
    assert!(find_persona("ROB").is_some());
    assert!(find_persona("nobody").is_none());
}

#[test]
fn matrix_covers_every_attribute_subset() {
    let matrix = condition_matrix();
    let l = LOCATIONS.len();
    let o = ORGANIZATIONS.len();
    let j = JOB_FUNCTIONS.len();
    assert_eq!(matrix.len(), l + o + j + l * o + l * j + o * j + l * o * j);

    assert_eq!(matrix[0], Condition::new().require(Attribute::Location, "Springfield"));
    assert_eq!(
        matrix.last().cloned(),
        Some(
            Condition::new()
                .require(Attribute::Location, "Whiterun")
                .require(Attribute::Organization, ORGANIZATIONS[1])
                .require(Attribute::JobFunction, "court wizard")
        )
    );

    for condition in &matrix {
        let count = condition.requirements().count();
        assert!((1..=3).contains(&count));
    }
}

#[test]
fn single_attribute_conditions_follow_enabled_and_equal() {
    for persona in personas() {
        for attribute in Attribute::ALL {
            for enabled_flag in [true, false] {
                let enabled = EnabledFields::all().with(attribute, enabled_flag);
                for condition in condition_matrix()
                    .iter()
                    .filter(|c| c.requirements().count() == 1 && c.required(attribute).is_some())
                {
                    let expected = enabled_flag
                        && condition.required(attribute) == Some(persona.value(attribute));
                    assert_eq!(
                        condition.is_satisfied_by(&persona, &enabled),
                        expected,
                        "{} / {}",
                        persona.id,
                        condition.label()
                    );
                }
            }
        }
    }
}

#[test]
fn compound_conditions_are_conjunctions() {
    let enabled = EnabledFields::all();
    for persona in personas() {
        for condition in condition_matrix() {
            let each = condition.requirements().all(|(attribute, value)| {
                Condition::new()
                    .require(attribute, value)
                    .is_satisfied_by(&persona, &enabled)
            });
            assert_eq!(condition.is_satisfied_by(&persona, &enabled), each);
        }
    }
}

#[test]
fn requirement_order_does_not_matter() {
    let persona = anna();
    let enabled = EnabledFields::all();
    let forward = Condition::new()
        .require(Attribute::Location, "Springfield")
        .require(Attribute::JobFunction, "doctor");
    let backward = Condition::new()
        .require(Attribute::JobFunction, "doctor")
        .require(Attribute::Location, "Springfield");
    assert_eq!(forward, backward);
    assert!(forward.is_satisfied_by(&persona, &enabled));
}

#[test]
fn disabling_a_toggle_only_flips_conditions_that_require_it() {
    let matrix = condition_matrix();
    for persona in personas() {
        let before = evaluate(Some(&persona), &EnabledFields::all(), &matrix);
        for attribute in Attribute::ALL {
            let enabled = EnabledFields::all().with(attribute, false);
            let after = evaluate(Some(&persona), &enabled, &matrix);
            for (index, condition) in matrix.iter().enumerate() {
                if condition.required(attribute).is_some() {
                    assert!(!after[index], "{} should be off", condition.label());
                } else {
                    assert_eq!(after[index], before[index], "{}", condition.label());
                }
            }
        }
    }
}

#[test]
fn unrelated_toggles_do_not_affect_results() {
    let persona = anna();
    let matrix = condition_matrix();
    let mut enabled = EnabledFields::all();
    enabled.user_key = false;
    enabled.name = false;
    enabled.email = false;
    enabled.org_key = false;
    enabled.street = false;
    assert_eq!(
        evaluate(Some(&persona), &enabled, &matrix),
        evaluate(Some(&persona), &EnabledFields::all(), &matrix)
    );
}

#[test]
fn non_matching_persona_satisfies_nothing() {
    let matrix = condition_matrix();
    let results = evaluate(Some(&stranger()), &EnabledFields::all(), &matrix);
    assert!(results.iter().all(|r| !r));
}

#[test]
fn no_selection_or_all_toggles_off_satisfies_nothing() {
    let matrix = condition_matrix();
    assert!(evaluate(None, &EnabledFields::all(), &matrix).iter().all(|r| !r));
    assert!(
        evaluate(Some(&anna()), &EnabledFields::none(), &matrix)
            .iter()
            .all(|r| !r)
    );
}

#[test]
fn anna_with_everything_enabled() {
    let persona = anna();
    let enabled = EnabledFields::all();

    let org_and_job = Condition::new()
        .require(Attribute::Organization, "Global Health Services")
        .require(Attribute::JobFunction, "doctor");
    assert!(org_and_job.is_satisfied_by(&persona, &enabled));

    let whiterun = Condition::new().require(Attribute::Location, "Whiterun");
    assert!(!whiterun.is_satisfied_by(&persona, &enabled));

    let satisfied = evaluate(Some(&persona), &enabled, &condition_matrix())
        .into_iter()
        .filter(|r| *r)
        .count();
    // One value per attribute matches: 3 singles, 3 pairs, 1 triple.
    assert_eq!(satisfied, 7);
}

#[test]
fn anna_with_city_switched_off() {
    let persona = anna();
    let mut enabled = EnabledFields::all();
    enabled.city = false;

    let springfield = Condition::new().require(Attribute::Location, "Springfield");
    assert!(!springfield.is_satisfied_by(&persona, &enabled));

    let doctor = Condition::new().require(Attribute::JobFunction, "doctor");
    assert!(doctor.is_satisfied_by(&persona, &enabled));
}

#[test]
fn empty_condition_is_vacuously_true() {
    assert!(Condition::new().is_satisfied_by(&anna(), &EnabledFields::none()));
}

#[test]
fn labels_list_present_attributes_in_fixed_order() {
    let condition = Condition::new()
        .require(Attribute::JobFunction, "nurse")
        .require(Attribute::Location, "Springfield");
    assert_eq!(condition.label(), "Location: Springfield + Job Function: nurse");
}

#[test]
fn multi_context_omits_disabled_fields() {
    let persona = anna();
    let full = persona.multi_context(&EnabledFields::all());
    assert_eq!(full["kind"], "multi");
    assert_eq!(full["user"]["jobFunction"], "doctor");
    assert_eq!(full["organization"]["address"]["city"], "Springfield");

    let mut enabled = EnabledFields::all();
    enabled.email = false;
    enabled.street = false;
    enabled.city = false;
    let trimmed = persona.multi_context(&enabled);
    assert!(trimmed["user"].get("email").is_none());
    assert!(trimmed["organization"].get("address").is_none());
    assert_eq!(trimmed["organization"]["name"], "Global Health Services");
}
