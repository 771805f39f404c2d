use std::path::Path;

use anyhow::Context;
use realty_client::{UploadFile, UploadTarget};
use realty_forms::ProfileForm;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{UploadCommands, UploadPropertyArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `realty upload <subcommand>`.
pub async fn handle(
    action: &UploadCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UploadCommands::Profile(args) => profile(&args.file, ctx, flags).await,
        UploadCommands::Property(args) => property(args, ctx, flags).await,
    }
}

/// Upload the picture, then point the profile at it.
async fn profile(path: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let current = ctx.require_session()?;
    let file = read(path).await?;
    let image_url = ctx
        .client()
        .upload_image(UploadTarget::Profile, &file)
        .await?;

    let form = ProfileForm {
        profile_image: Some(image_url.clone()),
        ..ProfileForm::default()
    };
    let session = ctx.session.submit_profile(current.id, &form).await?;
    output(
        &json!({ "imageUrl": image_url, "user": session }),
        flags.format,
    )
}

async fn property(
    args: &UploadPropertyArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_landlord()?;
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(read(path).await?);
    }
    let urls = ctx
        .client()
        .upload_images(UploadTarget::Property, &files, args.attached)
        .await?;
    output(&json!({ "imageUrls": urls }), flags.format)
}

async fn read(path: &Path) -> anyhow::Result<UploadFile> {
    UploadFile::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}
