use std::process::Stdio;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::{
    dto::checkout::{CheckoutLogRequest, CheckoutLogResponse},
    error::{AppError, AppResult},
    state::AppState,
};

/// A checkout total as received plus its numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutTotal {
    pub raw: String,
    pub amount: f64,
}

/// Accepts a JSON number or numeric string. Missing, zero, blank or
/// non-numeric totals are rejected.
pub fn parse_total_price(value: Option<&Value>) -> Option<CheckoutTotal> {
    let (raw, amount) = match value? {
        Value::Number(n) => (n.to_string(), n.as_f64()?),
        Value::String(s) => {
            let s = s.trim();
            (s.to_string(), s.parse::<f64>().ok()?)
        }
        _ => return None,
    };
    if !amount.is_finite() || amount == 0.0 {
        return None;
    }
    Some(CheckoutTotal { raw, amount })
}

/// en-US currency rendering: `$1,234.50`, `-$3.00`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn checkout_line(total: &CheckoutTotal) -> String {
    format!(
        "Checkout completed - Total Price: {} (${})",
        format_usd(total.amount),
        total.raw
    )
}

/// Validates the request and hands the total to a detached task; the
/// caller never waits on the logging.
pub fn log_checkout(
    state: &AppState,
    payload: CheckoutLogRequest,
) -> AppResult<CheckoutLogResponse> {
    tracing::info!(total_price = ?payload.total_price, "received checkout request");

    let total = parse_total_price(payload.total_price.as_ref())
        .ok_or_else(|| AppError::BadRequest("Total price is required".into()))?;

    let hook = state.config.checkout_hook.clone();
    tokio::spawn(async move {
        match hook {
            Some(command) => run_hook(&command, &total).await,
            None => tracing::info!(
                total_price = total.amount,
                "{}",
                checkout_line(&total)
            ),
        }
    });

    Ok(CheckoutLogResponse {
        success: true,
        message: "Checkout logged".into(),
    })
}

async fn run_hook(command: &str, total: &CheckoutTotal) {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return;
    };

    let spawned = Command::new(program)
        .args(parts)
        .arg(&total.raw)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => {
            tracing::error!(error = %err, program, "failed to start checkout hook");
            return;
        }
    };

    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::info!(target: "checkout_hook", "{line}");
            }
        });
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                tracing::warn!(target: "checkout_hook", "script error: {line}");
            }
        });
    }

    match child.wait().await {
        Ok(status) if status.success() => {}
        Ok(status) => tracing::error!(code = ?status.code(), "checkout hook exited with failure"),
        Err(err) => tracing::error!(error = %err, "checkout hook wait failed"),
    }
}
