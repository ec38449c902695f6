use clap::{Parser, Subcommand};
use spectrum_core::{ExtensionRegistry, FileInfo, FileRef};
use spectrum_extension::{register_extension, SortOrderAccessor, SORT_ORDER_ATTRIBUTE};
use spectrum_platform::PlatformAttributeStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "spectrum")]
#[command(about = "Host harness for the Spectrum sort-order extension", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered extensions
    Extensions,
    /// List the columns the extension contributes
    Columns,
    /// Show the sort-order column for files, as a listing would render it
    Info {
        /// Files to list
        paths: Vec<PathBuf>,
    },
    /// Print the sort order of a file
    Get {
        path: PathBuf,
    },
    /// Set the sort order of a file
    Set {
        path: PathBuf,
        value: String,
    },
    /// Remove the sort-order attribute from a file
    Clear {
        path: PathBuf,
    },
    /// Open the settings page for a file and optionally apply a new value
    Edit {
        path: PathBuf,
        /// Value to type into the entry before clicking apply
        #[arg(short, long)]
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = Arc::new(PlatformAttributeStore::new());
    let mut registry = ExtensionRegistry::new();
    register_extension(&mut registry, store.clone());

    match cli.command {
        Commands::Extensions => {
            for provider in registry.name_and_desc_providers() {
                for entry in provider.get_name_and_desc() {
                    println!("{}", entry);
                }
            }
        }
        Commands::Columns => {
            for provider in registry.column_providers() {
                for column in provider.get_columns() {
                    println!("Column: {}", column.id);
                    println!("  Attribute: {}", column.attribute);
                    println!("  Label: {}", column.label);
                    println!("  Default: {:?}", column.default_value);
                }
            }
        }
        Commands::Info { paths } => {
            for path in paths {
                let mut info = FileInfo::new(FileRef::new(&path));
                for provider in registry.info_providers() {
                    provider.update_file_info(&mut info).await?;
                }
                let value = info.string_attribute(SORT_ORDER_ATTRIBUTE).unwrap_or("");
                println!("{}\t{}", path.display(), value);
            }
        }
        Commands::Get { path } => {
            let accessor = SortOrderAccessor::new(store);
            println!("{}", accessor.read(&FileRef::new(path))?);
        }
        Commands::Set { path, value } => {
            let accessor = SortOrderAccessor::new(store);
            accessor.write(&FileRef::new(path), &value)?;
        }
        Commands::Clear { path } => {
            let accessor = SortOrderAccessor::new(store);
            accessor.clear(&FileRef::new(path))?;
        }
        Commands::Edit { path, value } => {
            let file = FileRef::new(&path);
            let pages: Vec<_> = registry
                .page_providers()
                .iter()
                .flat_map(|provider| provider.get_pages(std::slice::from_ref(&file)))
                .collect();
            let page = pages.into_iter().next().ok_or_else(|| {
                anyhow::anyhow!("no property page offered for {}", path.display())
            })?;

            let entry = page.root.widget("entry_sort_order")?;
            println!("Page: {} ({})", page.label, page.id);
            println!("Current: {}", entry.text());

            if let Some(value) = value {
                entry.set_text(&value);
                page.root.click("button_apply")?;

                let status = page.root.widget("label_status")?;
                if status.is_visible() {
                    anyhow::bail!("apply failed: {}", status.text());
                }
                println!("Applied: {}", entry.text());
            }
        }
    }

    Ok(())
}
