use realty_search::{FilterCriteria, PriceRange};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PropertyListArgs;
use crate::commands::shared::limit::take;
use crate::context::AppContext;
use crate::output::listings;

pub async fn handle(
    args: &PropertyListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = criteria(args);
    let query = criteria.to_query();

    if args.path_only {
        println!("{}", query.listing_path());
        return Ok(());
    }

    tracing::debug!(query = %query, "searching listings");
    let properties = ctx.client().list_properties(&query).await?;
    listings(&take(properties, ctx.limit(flags)), flags.format)
}

/// A bucket label and explicit bounds are mutually exclusive on the
/// command line; bounds of `0` mean unset.
fn criteria(args: &PropertyListArgs) -> FilterCriteria {
    let criteria = FilterCriteria::from_labels(
        args.location.as_deref().unwrap_or_default(),
        args.property_type.as_deref().unwrap_or_default(),
        args.price_range.as_deref().unwrap_or_default(),
    );
    if args.min_price.is_some() || args.max_price.is_some() {
        criteria.with_price(PriceRange::from_bounds(
            args.min_price.unwrap_or(0),
            args.max_price.unwrap_or(0),
        ))
    } else {
        criteria
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::criteria;
    use crate::cli::subcommands::PropertyListArgs;

    fn args() -> PropertyListArgs {
        PropertyListArgs {
            location: None,
            property_type: None,
            price_range: None,
            min_price: None,
            max_price: None,
            path_only: false,
        }
    }

    #[test]
    fn no_filters_no_parameters() {
        assert!(criteria(&args()).to_query().is_empty());
    }

    #[test]
    fn bucket_label_sets_both_bounds() {
        let query = criteria(&PropertyListArgs {
            location: Some("Any Location".into()),
            price_range: Some("$2,000,000 - $5,000,000".into()),
            ..args()
        })
        .to_query();
        assert_eq!(query.to_query_string(), "minPrice=2000000&maxPrice=5000000");
    }

    #[test]
    fn numeric_bounds_skip_zero() {
        let query = criteria(&PropertyListArgs {
            property_type: Some("Villa".into()),
            min_price: Some(0),
            max_price: Some(750_000),
            ..args()
        })
        .to_query();
        assert_eq!(query.get("propertyType"), Some("Villa"));
        assert_eq!(query.get("minPrice"), None);
        assert_eq!(query.get("maxPrice"), Some("750000"));
    }
}
