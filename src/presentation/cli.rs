// Command-line surface: argument parsing and one-shot view rendering
use crate::application::list_view::ListView;
use crate::application::session::MaintenanceSession;
use crate::domain::maintenance::DetailQuery;
use crate::infrastructure::config::AppConfig;
use crate::presentation::render;
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hotel-maintenance", about = "Hotel predictive maintenance client")]
pub struct Cli {
    /// Prediction service base URL, overriding configuration
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Page buttons shown around the current page
    #[arg(long)]
    pub max_visible: Option<usize>,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(base_url) = &self.base_url {
            config.backend.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.views.page_size = page_size;
        }
        if let Some(max_visible) = self.max_visible {
            config.views.max_visible_buttons = max_visible;
        }
        config
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive substring to filter on
    #[arg(long)]
    pub filter: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Device counts, overdue devices and the AI weekly list
    Dashboard {
        #[command(flatten)]
        list: ListOptions,
    },
    /// Facility maintenance schedule
    Scheduled {
        #[command(flatten)]
        list: ListOptions,
    },
    /// Room devices due within six months
    Upcoming {
        #[command(flatten)]
        list: ListOptions,
    },
    /// Devices of one room, e.g. `room "roomNumber=2000"`
    Room {
        query: String,
        #[command(flatten)]
        list: ListOptions,
    },
    Detail {
        #[arg(long)]
        room: i64,
        #[arg(long)]
        device: String,
    },
    /// Model and training data status
    Status,
    SelectHotel {
        name: String,
    },
}

fn narrow(view: &mut ListView, options: &ListOptions) {
    if let Some(filter) = &options.filter {
        view.set_query(filter.as_str());
    }
    view.go_to_page(options.page);
}

/// Mount the requested view once and render it.
pub async fn run(
    command: Command,
    session: &MaintenanceSession,
    today: NaiveDate,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Dashboard { list } => {
            let mut view = session.dashboard_view();
            view.mount().await;
            narrow(view.weekly_mut(), &list);
            render::dashboard(&view, today)
        }
        Command::Scheduled { list } => {
            let mut view = session.scheduled_view();
            view.mount().await;
            narrow(view.list_mut(), &list);
            render::list("Scheduled facility maintenance", view.list(), today)
        }
        Command::Upcoming { list } => {
            let mut view = session.upcoming_view();
            view.mount().await;
            narrow(view.list_mut(), &list);
            render::list("Upcoming maintenance", view.list(), today)
        }
        Command::Room { query, list } => {
            let mut view = session.room_search_view();
            view.mount(&query).await;
            narrow(view.list_mut(), &list);
            let title = match view.room_number() {
                Some(room) => format!("Room {room}"),
                None => "Room search".to_string(),
            };
            render::list(&title, view.list(), today)
        }
        Command::Detail { room, device } => {
            let mut fetcher = session.detail_fetcher();
            fetcher.show(DetailQuery::new(room, device)).await;
            render::detail(&fetcher, today)
        }
        Command::Status => {
            let status = session
                .service_status()
                .await
                .context("Failed to read service status")?;
            render::service_status(&status)
        }
        Command::SelectHotel { name } => {
            let selection = session
                .choose_hotel_data(&name)
                .await
                .with_context(|| format!("Failed to load data for {name}"))?;
            render::hotel_selection(&selection)
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeBackend, room_device};
    use crate::infrastructure::config::{ViewSettings, load_config_from_str};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn parses_list_subcommand_with_options() {
        let cli = Cli::try_parse_from([
            "hotel-maintenance",
            "--page-size",
            "5",
            "upcoming",
            "--filter",
            "tele",
            "--page",
            "2",
        ])
        .unwrap();

        match &cli.command {
            Command::Upcoming { list } => {
                assert_eq!(list.filter.as_deref(), Some("tele"));
                assert_eq!(list.page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let config = cli.apply_overrides(load_config_from_str("").unwrap());
        assert_eq!(config.views.page_size, 5);
        assert_eq!(config.views.max_visible_buttons, 10);
    }

    #[test]
    fn parses_detail_and_hotel_selection() {
        let cli = Cli::try_parse_from([
            "hotel-maintenance",
            "detail",
            "--room",
            "101",
            "--device",
            "AC",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Detail { room: 101, .. }));

        let cli = Cli::try_parse_from(["hotel-maintenance", "select-hotel", "Westin"]).unwrap();
        assert!(matches!(cli.command, Command::SelectHotel { .. }));
    }

    #[tokio::test]
    async fn room_command_without_number_reports_missing_input() {
        let backend = Arc::new(FakeBackend::default());
        let session = MaintenanceSession::new(backend.clone(), ViewSettings::default());

        let output = run(
            Command::Room {
                query: "floor=2".to_string(),
                list: ListOptions::default(),
            },
            &session,
            today(),
        )
        .await
        .unwrap();

        assert!(output.contains("no room number provided"));
        assert_eq!(backend.total_calls(), 0);
    }

    #[tokio::test]
    async fn upcoming_command_filters_and_pages() {
        let records = (1..=20)
            .map(|room| room_device(room, if room % 2 == 0 { "Television" } else { "AC" }))
            .collect();
        let backend = Arc::new(FakeBackend::default().with_upcoming(records));
        let session = MaintenanceSession::new(backend, ViewSettings::default());

        let output = run(
            Command::Upcoming {
                list: ListOptions {
                    filter: Some("tele".to_string()),
                    page: 2,
                },
            },
            &session,
            today(),
        )
        .await
        .unwrap();

        assert!(output.contains("Filter: tele"));
        assert!(output.contains("Room 18"));
        assert!(output.contains("Page 2 of 2"));
    }

    #[tokio::test]
    async fn status_failure_is_an_error() {
        let backend = Arc::new(FakeBackend::default().failing("service_status", 500, "down"));
        let session = MaintenanceSession::new(backend, ViewSettings::default());

        let err = run(Command::Status, &session, today()).await.unwrap_err();

        assert!(format!("{err:#}").contains("request failed with status 500"));
    }
}
