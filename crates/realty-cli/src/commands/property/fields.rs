use realty_forms::PropertyForm;

use crate::cli::subcommands::PropertyFieldArgs;

/// Overlay the flags that were given onto `form`. Repeated
/// `--additional-image` flags replace the whole list.
pub fn apply(args: &PropertyFieldArgs, mut form: PropertyForm) -> PropertyForm {
    let texts = [
        (&args.title, &mut form.title),
        (&args.description, &mut form.description),
        (&args.location, &mut form.location),
        (&args.city, &mut form.city),
        (&args.state, &mut form.state),
        (&args.price, &mut form.price),
        (&args.image_url, &mut form.image_url),
        (&args.square_feet, &mut form.square_feet),
        (&args.bedrooms, &mut form.bedrooms),
        (&args.bathrooms, &mut form.bathrooms),
        (&args.property_type, &mut form.property_type),
        (&args.listing_type, &mut form.listing_type),
        (&args.latitude, &mut form.latitude),
        (&args.longitude, &mut form.longitude),
    ];
    for (given, field) in texts {
        if let Some(value) = given {
            field.clone_from(value);
        }
    }
    if !args.additional_images.is_empty() {
        form.additional_images.clone_from(&args.additional_images);
    }
    if let Some(featured) = args.featured {
        form.is_featured = featured;
    }
    if let Some(new) = args.new {
        form.is_new = new;
    }
    form
}
