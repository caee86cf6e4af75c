mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daybook_core::clock::SystemClock;
use daybook_core::config::DaybookConfig;
use daybook_core::store::{FileStore, NotifiedFile};
use daybook_core::view::CalendarView;
use tracing_subscriber::EnvFilter;

use crate::commands::EventDetails;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "터미널에서 일정 관리: 일정, 주간/월간 보기, 알림")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 이번 주 또는 이번 달 일정 목록
    List {
        /// 제목, 설명, 위치에 이 문자열이 포함된 일정만 표시
        #[arg(short, long)]
        search: Option<String>,

        /// week 또는 month (기본값: 설정의 `default_view`)
        #[arg(short, long)]
        view: Option<CalendarView>,

        /// 기준 날짜 (YYYY-MM-DD, 기본값: 오늘)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// 한 주의 일정을 날짜별로 표시
    Week {
        /// 해당 주의 아무 날짜 (YYYY-MM-DD, 기본값: 오늘)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        search: Option<String>,

        /// 이전(음수) 또는 다음(양수) 주로 이동
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,
    },
    /// 월간 달력 표시
    Month {
        /// 해당 달의 아무 날짜 (YYYY-MM-DD, 기본값: 오늘)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        search: Option<String>,

        /// 이전(음수) 또는 다음(양수) 달로 이동
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,
    },
    /// 일정 추가
    New {
        title: String,

        /// 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// 시작 시간 (HH:MM)
        #[arg(short, long)]
        start: String,

        /// 종료 시간 (HH:MM)
        #[arg(short, long)]
        end: String,

        #[command(flatten)]
        details: EventDetails,

        /// 다른 일정과 겹쳐도 확인 없이 저장
        #[arg(short, long)]
        yes: bool,
    },
    /// 일정 수정
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// 시작 시간 (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// 종료 시간 (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[command(flatten)]
        details: EventDetails,

        /// 다른 일정과 겹쳐도 확인 없이 저장
        #[arg(short, long)]
        yes: bool,
    },
    /// 일정 삭제
    Delete { id: String },
    /// 다가오는 일정 (반복 일정 포함)
    Upcoming {
        /// 표시할 일수 (1~366)
        #[arg(short = 'n', long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=366))]
        days: u32,

        /// 시작 날짜 (YYYY-MM-DD, 기본값: 오늘)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// 한 달의 공휴일
    Holidays {
        /// 해당 달의 아무 날짜 (YYYY-MM-DD, 기본값: 오늘)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// 곧 시작하는 일정을 감시하고 알림 출력
    Notify,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = DaybookConfig::load().context("설정을 불러오지 못했습니다")?;
    let events_path = config.events_path();
    let mut store = FileStore::new(&events_path);
    let notified = NotifiedFile::beside(&events_path);
    let clock = SystemClock;
    tracing::debug!(path = %store.path().display(), "using events file");

    match cli.command {
        Commands::List { search, view, date } => {
            let view = view.unwrap_or(config.default_view);
            commands::list::run(&store, &clock, search.as_deref(), view, date.as_deref())
        }
        Commands::Week {
            date,
            search,
            shift,
        } => {
            let args = commands::week::WeekArgs {
                date: date.as_deref(),
                search: search.as_deref(),
                shift,
            };
            commands::week::run(&store, &notified, &clock, args)
        }
        Commands::Month {
            date,
            search,
            shift,
        } => commands::month::run(&store, &clock, date.as_deref(), search.as_deref(), shift),
        Commands::New {
            title,
            date,
            start,
            end,
            details,
            yes,
        } => commands::new::run(&mut store, title, &date, &start, &end, details, yes),
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            details,
            yes,
        } => {
            let changes = commands::edit::Changes {
                title,
                date,
                start,
                end,
                details,
            };
            commands::edit::run(&mut store, &id, changes, yes)
        }
        Commands::Delete { id } => commands::delete::run(&mut store, &id),
        Commands::Upcoming { days, date } => {
            commands::upcoming::run(&store, &clock, days, date.as_deref())
        }
        Commands::Holidays { date } => commands::holidays::run(&clock, date.as_deref()),
        Commands::Notify => {
            let interval = config.notify_interval()?;
            commands::notify::run(&store, &notified, &clock, interval).await
        }
    }
}
