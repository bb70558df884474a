use anyhow::{Context, Result};
use bytesize::ByteSize;
use cldctl_core::{public_id, ResourceKind, Selector, Settings};
use cli_table::{
    format::{Border, Justify, Separator},
    Cell, Table, TableStruct,
};
use regex::Regex;

use crate::cloudinary::{MediaService, Resource, ResourceDetails};

pub async fn list<S: MediaService>(
    service: &S,
    settings: &Settings,
    selector: &Selector,
    path_override: &str,
) -> Result<()> {
    if selector.is_empty() {
        println!("==> Raw resources:");
        print_resources(service.resources(ResourceKind::Raw).await?)?;
        println!("==> Images:");
        print_resources(service.resources(ResourceKind::Image).await?)?;
        return Ok(());
    }

    for (kind, name) in selector.targets() {
        let public_id =
            public_id::compose(name, kind, path_override, &settings.default_prepend_path);
        println!("==> PublicID: {public_id}");
        println!("==> {} details:", label(kind));
        print_details(service.resource_details(kind, &public_id).await?)?;
    }
    Ok(())
}

pub async fn delete<S: MediaService>(
    service: &S,
    settings: &Settings,
    selector: &Selector,
    path_override: &str,
    simulate: bool,
) -> Result<()> {
    let (kind, name) = selector.target()?;
    let public_id = public_id::compose(name, kind, path_override, &settings.default_prepend_path);
    println!("==> PublicID: {public_id}");
    println!("==> Deleting {} {name}", label(kind).to_lowercase());

    if let Some(pattern) = &settings.keep_files_pattern {
        let keep = Regex::new(pattern)
            .with_context(|| format!("invalid keep-files pattern `{pattern}`"))?;
        if keep.is_match(&public_id) {
            tracing::warn!(%public_id, %pattern, "deletion refused by keep-files pattern");
            println!("{public_id} is protected by the keep-files pattern, not deleted");
            return Ok(());
        }
    }

    if simulate {
        println!("{public_id} would be deleted (dry run)");
        return Ok(());
    }

    service.delete(kind, &public_id).await?;
    println!("{public_id} deleted");
    Ok(())
}

fn label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Raw => "Raw file",
        ResourceKind::Image => "Image",
    }
}

fn borderless(table: TableStruct) -> TableStruct {
    table
        .separator(
            Separator::builder()
                .column(None)
                .row(None)
                .title(None)
                .build(),
        )
        .border(Border::builder().build())
}

fn size_cell(bytes: u64) -> cli_table::CellStruct {
    ByteSize(bytes).to_string().cell().justify(Justify::Right)
}

fn print_resources(resources: Vec<Resource>) -> Result<()> {
    if resources.is_empty() {
        println!("No resource found.");
        return Ok(());
    }
    let table = resources
        .into_iter()
        .map(|r| {
            vec![
                r.public_id.cell(),
                r.version.cell().justify(Justify::Right),
                r.resource_type.cell(),
                size_cell(r.bytes),
            ]
        })
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "PUBLIC ID".cell(),
            "VERSION".cell(),
            "TYPE".cell(),
            "SIZE".cell(),
        ]);
    cli_table::print_stdout(borderless(table))?;
    Ok(())
}

fn print_details(details: Option<ResourceDetails>) -> Result<()> {
    let Some(ResourceDetails { resource, derived }) = details else {
        println!("No resource details found.");
        return Ok(());
    };

    let dimension = |d: Option<u32>| d.map(|d| d.to_string()).unwrap_or_default();
    let table = vec![vec![
        resource.public_id.cell(),
        resource.format.unwrap_or_default().cell(),
        resource.version.cell(),
        resource.resource_type.cell(),
        size_cell(resource.bytes),
        dimension(resource.width).cell().justify(Justify::Right),
        dimension(resource.height).cell().justify(Justify::Right),
        resource.secure_url.cell(),
    ]]
    .table()
    .title(vec![
        "PUBLIC ID".cell(),
        "FORMAT".cell(),
        "VERSION".cell(),
        "TYPE".cell(),
        "SIZE".cell(),
        "WIDTH".cell(),
        "HEIGHT".cell(),
        "URL".cell(),
    ]);
    cli_table::print_stdout(borderless(table))?;

    if derived.is_empty() {
        return Ok(());
    }
    println!();
    let table = derived
        .into_iter()
        .map(|d| vec![d.transformation.cell(), size_cell(d.bytes), d.secure_url.cell()])
        .collect::<Vec<_>>()
        .table()
        .title(vec!["TRANSFORMATION".cell(), "SIZE".cell(), "URL".cell()]);
    cli_table::print_stdout(borderless(table))?;
    Ok(())
}
