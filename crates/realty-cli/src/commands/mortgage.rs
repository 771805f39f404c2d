use realty_core::mortgage::MortgageTerms;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MortgageArgs;
use crate::output::{format_price, output};

/// Handle `realty mortgage`.
pub fn handle(args: &MortgageArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let terms = terms(args)?;
    let estimate = terms.estimate();
    output(
        &json!({
            "terms": terms,
            "estimate": estimate,
            "monthly": format_price(estimate.monthly_payment),
        }),
        flags.format,
    )
}

fn terms(args: &MortgageArgs) -> anyhow::Result<MortgageTerms> {
    if !args.price.is_finite() || args.price <= 0.0 {
        anyhow::bail!("price must be positive");
    }
    let mut terms = MortgageTerms::for_price(args.price);
    if let Some(loan) = args.loan {
        terms = terms.with_loan_amount(loan)?;
    }
    if let Some(rate) = args.rate {
        terms = terms.with_rate(rate);
    }
    if let Some(years) = args.years {
        terms = terms.with_term(years);
    }
    Ok(terms)
}
