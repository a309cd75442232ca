mod config;
mod logging;
mod routes;
mod structured_data;
mod textures;
mod ui;
mod views;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use config::AppConfig;
use routes::Route;
use seva_kiosk_adapters::{
    present_contact_settings, present_donation_settings, present_event_row, present_gallery_row,
    present_pagination, present_social_settings, SanityContentClient,
};
use seva_kiosk_application::{
    ContactSettingsQuery, ContentService, DonationSettingsQuery, EventWindowQuery,
    FeaturedImagesQuery, GalleryImagesQuery, SocialMediaSettingsQuery,
};
use seva_kiosk_domain::CategoryFilter;

#[derive(Parser)]
#[command(name = "seva-kiosk")]
#[command(about = "Rudhirsetu Seva Sanstha content kiosk")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the kiosk window (the default when no command is given)
    Ui,
    /// List gallery images, optionally narrowed to one category
    Gallery {
        /// Category wire id, e.g. blood-donation or eye-care
        #[arg(long)]
        category: Option<CategoryFilter>,
    },
    /// List the featured gallery images
    Featured,
    /// List one page of camps
    Camps {
        /// Show the past window instead of the upcoming one
        #[arg(long)]
        past: bool,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Print the donation settings document
    Donation,
    /// Print the contact settings document
    Contact,
    /// Print the social media settings document
    Social,
    /// Print the JSON-LD metadata served with a page
    Meta {
        #[arg(value_enum)]
        page: MetaPage,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetaPage {
    Donations,
    Contact,
    Camps,
    Gallery,
    Social,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match run_command(cli.command.unwrap_or(Command::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(message)) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    match command {
        Command::Ui => return ui::launch_window(config).map_err(CommandError::Runtime),
        Command::Meta { page } => return print_structured_data(page),
        Command::Camps { page: 0, .. } => {
            return Err(CommandError::Usage("page must be at least 1".to_string()));
        }
        _ => {}
    }

    let client = SanityContentClient::new(&config.sanity()).map_err(|error| {
        CommandError::Runtime(format!("failed to build content client: {error}"))
    })?;
    let service = ContentService::new(Arc::new(client));
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|error| CommandError::Runtime(format!("failed to start runtime: {error}")))?;

    runtime.block_on(async {
        match command {
            Command::Gallery { category } => {
                let filter = category.unwrap_or_default();
                let images = service
                    .gallery_images(GalleryImagesQuery { filter })
                    .await
                    .map_err(|error| {
                        CommandError::Runtime(format!("gallery query failed: {error}"))
                    })?;
                if images.is_empty() {
                    println!("no images for {filter}");
                    return Ok(());
                }
                for image in &images {
                    println!("{}", present_gallery_row(image));
                }
                Ok(())
            }
            Command::Featured => {
                let images = service
                    .featured_images(FeaturedImagesQuery)
                    .await
                    .map_err(|error| {
                        CommandError::Runtime(format!("featured query failed: {error}"))
                    })?;
                if images.is_empty() {
                    println!("no featured images");
                    return Ok(());
                }
                for image in &images {
                    println!("{}", present_gallery_row(image));
                }
                Ok(())
            }
            Command::Camps { past, page } => {
                let query = EventWindowQuery {
                    page,
                    page_size: config.event_page_size,
                };
                let window = if past {
                    service.past_events(query).await
                } else {
                    service.upcoming_events(query).await
                };
                let window = window.map_err(|error| {
                    CommandError::Runtime(format!("camps query failed: {error}"))
                })?;
                if window.events.is_empty() {
                    println!("no camps on this page");
                } else {
                    for event in &window.events {
                        println!("{}", present_event_row(event));
                    }
                }
                println!("{}", present_pagination(&window.pagination));
                Ok(())
            }
            Command::Donation => {
                let settings = service
                    .donation_settings(DonationSettingsQuery)
                    .await
                    .map_err(|error| {
                        CommandError::Runtime(format!("donation query failed: {error}"))
                    })?;
                match settings {
                    Some(settings) => println!("{}", present_donation_settings(&settings)),
                    None => println!("no donation settings published"),
                }
                Ok(())
            }
            Command::Contact => {
                let settings = service
                    .contact_settings(ContactSettingsQuery)
                    .await
                    .map_err(|error| {
                        CommandError::Runtime(format!("contact query failed: {error}"))
                    })?;
                match settings {
                    Some(settings) => println!("{}", present_contact_settings(&settings)),
                    None => println!("no contact settings published"),
                }
                Ok(())
            }
            Command::Social => {
                let settings = service
                    .social_media_settings(SocialMediaSettingsQuery)
                    .await
                    .map_err(|error| {
                        CommandError::Runtime(format!("social query failed: {error}"))
                    })?;
                match settings {
                    Some(settings) => println!("{}", present_social_settings(&settings)),
                    None => println!("no social media settings published"),
                }
                Ok(())
            }
            Command::Ui | Command::Meta { .. } => Ok(()),
        }
    })
}

fn print_structured_data(page: MetaPage) -> Result<(), CommandError> {
    let route = match page {
        MetaPage::Donations => Route::Donations,
        MetaPage::Contact => Route::Contact,
        MetaPage::Camps => Route::Camps,
        MetaPage::Gallery => Route::Gallery,
        MetaPage::Social => Route::Social,
    };
    let Some(document) = structured_data::for_route(route) else {
        return Err(CommandError::Runtime(format!(
            "no structured data for {}",
            route.path()
        )));
    };
    let encoded = serde_json::to_string_pretty(&document).map_err(|error| {
        CommandError::Runtime(format!("failed to encode structured data: {error}"))
    })?;
    println!("{encoded}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use seva_kiosk_domain::Category;

    use super::*;

    #[test]
    fn bare_invocation_defaults_to_the_ui() {
        let cli = Cli::try_parse_from(["seva-kiosk"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn gallery_accepts_a_category_wire_id() {
        let cli = Cli::try_parse_from(["seva-kiosk", "gallery", "--category", "eye-care"])
            .expect("gallery command should parse");
        match cli.command {
            Some(Command::Gallery { category }) => {
                assert_eq!(category, Some(CategoryFilter::Only(Category::EyeCare)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn gallery_rejects_unknown_categories() {
        let result =
            Cli::try_parse_from(["seva-kiosk", "gallery", "--category", "basket-weaving"]);
        assert!(result.is_err());
    }

    #[test]
    fn camps_parse_the_window_flags() {
        let cli = Cli::try_parse_from(["seva-kiosk", "camps", "--past", "--page", "3"])
            .expect("camps command should parse");
        match cli.command {
            Some(Command::Camps { past, page }) => {
                assert!(past);
                assert_eq!(page, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn meta_accepts_each_published_page() {
        for page in ["donations", "contact", "camps", "gallery", "social"] {
            let cli = Cli::try_parse_from(["seva-kiosk", "meta", page])
                .expect("meta command should parse");
            assert!(matches!(cli.command, Some(Command::Meta { .. })), "{page}");
        }
    }
}
