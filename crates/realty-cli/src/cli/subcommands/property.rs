use clap::{Args, Subcommand};

/// Listing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PropertyCommands {
    /// Search listings.
    List(PropertyListArgs),
    /// Show one listing.
    Get(PropertyIdArgs),
    /// Featured listings from the home page.
    Featured,
    /// Listings owned by the signed-in account.
    Mine,
    /// Publish a listing (landlord accounts only).
    Create(PropertyFieldArgs),
    /// Edit a listing (landlord accounts only).
    Update(PropertyUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PropertyListArgs {
    /// City, or "Any Location"
    #[arg(long)]
    pub location: Option<String>,
    /// Property type, or "Any Type"
    #[arg(long = "type")]
    pub property_type: Option<String>,
    /// Preset price bucket, e.g. "$1,000,000 - $2,000,000"
    #[arg(long, conflicts_with_all = ["min_price", "max_price"])]
    pub price_range: Option<String>,
    #[arg(long)]
    pub min_price: Option<u64>,
    #[arg(long)]
    pub max_price: Option<u64>,
    /// Print the listing-page path for these filters instead of fetching.
    #[arg(long)]
    pub path_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PropertyIdArgs {
    pub id: i64,
}

/// Listing fields. Numbers are taken as typed and validated with the form.
#[derive(Clone, Debug, Default, Args)]
pub struct PropertyFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Street address.
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Extra image URL; repeat for several.
    #[arg(long = "additional-image")]
    pub additional_images: Vec<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub square_feet: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub bedrooms: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub bathrooms: Option<String>,
    #[arg(long = "type")]
    pub property_type: Option<String>,
    /// "For Sale" or "For Rent"
    #[arg(long)]
    pub listing_type: Option<String>,
    #[arg(long)]
    pub featured: Option<bool>,
    #[arg(long)]
    pub new: Option<bool>,
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PropertyUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: PropertyFieldArgs,
}
