use base::setting::Settings;
use eyre::Result;
use log::{info, trace, warn};
use serde::Serialize;

use crate::ExportOptions;
use common::fetch::load;
use common::preview::{render_chart_preview, render_preview};
use common::send::{send, SendError};
use common::Page;

pub async fn release(settings: &Settings, opts: ExportOptions) -> Result<()> {
    let source = load(opts.source.as_str()).await?;
    // the parsed document is not Send, keep it out of the await points
    let release = {
        let page = Page::from_source(source, opts.url)?;
        trace!("Extracting release from {}", page.url());
        page.release()?
    };
    let release = match release {
        Some(release) => release,
        None => return Ok(()),
    };

    println!("{}", render_preview(&release));
    deliver(settings, &[release], opts.dry_run).await
}

pub async fn chart(settings: &Settings, opts: ExportOptions) -> Result<()> {
    let source = load(opts.source.as_str()).await?;
    let entries = {
        let page = Page::from_source(source, opts.url)?;
        trace!("Extracting chart from {}", page.url());
        page.chart()?
    };

    if entries.is_empty() {
        info!("No Bandcamp releases on this chart");
    } else {
        println!("{}", render_chart_preview(&entries));
    }
    deliver(settings, &entries, opts.dry_run).await
}

/// A server that cannot be reached is reported and otherwise ignored, only
/// a missing configuration stops the command.
async fn deliver<T: Serialize>(settings: &Settings, items: &[T], dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }
    match send(settings, items).await {
        Ok(_) => Ok(()),
        Err(SendError::Request(e)) => {
            warn!("Could not deliver {} item(s): {}", items.len(), e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
