use std::time::Duration;

use api_types::analytics::Period;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
    source::{DataSource, LocalStore, Snapshot},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use form::{GoalField, GoalsForm, TransactionForm, TxField};

mod form;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Transactions,
    Health,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Transactions, Tab::Health];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Health => "Health",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Transactions,
            Self::Transactions => Self::Health,
            Self::Health => Self::Dashboard,
        }
    }
}

/// How per-category spending is drawn on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpendingView {
    #[default]
    Chart,
    List,
}

#[derive(Debug, Clone, Default)]
pub enum Mode {
    #[default]
    Browse,
    Transaction(TransactionForm),
    Goals(GoalsForm),
}

#[derive(Debug, Default)]
pub struct AppState {
    pub tab: Tab,
    pub period: Period,
    pub spending_view: SpendingView,
    pub data: Snapshot,
    /// Row index in the transactions table.
    pub selected: usize,
    pub mode: Mode,
    /// Last failure, shown until dismissed.
    pub banner: Option<String>,
    pub offline: bool,
}

impl AppState {
    fn select_next(&mut self) {
        if self.data.transactions.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.data.transactions.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self
            .selected
            .min(self.data.transactions.len().saturating_sub(1));
    }
}

pub struct App {
    source: DataSource,
    timezone: Tz,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let timezone: Tz = config.timezone.parse().map_err(|err| {
            AppError::Setting(format!("invalid timezone {:?}: {err}", config.timezone))
        })?;

        let source = if config.offline {
            DataSource::Local(LocalStore::with_sample_data(timezone))
        } else {
            DataSource::Remote(Client::new(&config.base_url)?)
        };

        Ok(Self::with_source(source, timezone))
    }

    pub fn with_source(source: DataSource, timezone: Tz) -> Self {
        let state = AppState {
            offline: source.is_offline(),
            ..AppState::default()
        };
        Self {
            source,
            timezone,
            state,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.refresh().await;

        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key).await;
            }
        }

        Ok(())
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Refetches every panel for the current period.
    async fn refresh(&mut self) {
        let (data, banner) = self.source.load(self.state.period).await;
        self.state.data = data;
        self.state.clamp_selection();
        if banner.is_some() {
            self.state.banner = banner;
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.mode {
            Mode::Browse => self.handle_browse(action).await,
            Mode::Transaction(_) => self.handle_transaction_form(action).await,
            Mode::Goals(_) => self.handle_goals_form(action).await,
        }
    }

    async fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => self.state.tab = self.state.tab.next(),
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Input(ch) => self.handle_browse_char(ch).await,
            _ => {}
        }
    }

    async fn handle_browse_char(&mut self, ch: char) {
        match ch {
            'q' => self.should_quit = true,
            '1' => self.state.tab = Tab::Dashboard,
            '2' => self.state.tab = Tab::Transactions,
            '3' => self.state.tab = Tab::Health,
            'm' => self.set_period(Period::Month).await,
            '6' => self.set_period(Period::SixMonths).await,
            'y' => self.set_period(Period::Year).await,
            'c' => {
                self.state.spending_view = match self.state.spending_view {
                    SpendingView::Chart => SpendingView::List,
                    SpendingView::List => SpendingView::Chart,
                };
            }
            'x' => self.state.banner = None,
            'r' => self.refresh().await,
            'j' => self.state.select_next(),
            'k' => self.state.select_prev(),
            'a' if self.state.tab == Tab::Transactions => {
                self.state.mode = Mode::Transaction(TransactionForm::new(self.today()));
            }
            'e' if self.state.tab == Tab::Transactions => {
                if let Some(tx) = self.state.data.transactions.get(self.state.selected) {
                    self.state.mode = Mode::Transaction(TransactionForm::edit(tx));
                }
            }
            'd' if self.state.tab == Tab::Transactions => self.delete_selected().await,
            'e' if self.state.tab == Tab::Health => {
                self.state.mode = Mode::Goals(GoalsForm::new(&self.state.data.goals.goals));
            }
            _ => {}
        }
    }

    async fn set_period(&mut self, period: Period) {
        if self.state.period != period {
            self.state.period = period;
            self.refresh().await;
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self
            .state
            .data
            .transactions
            .get(self.state.selected)
            .map(|tx| tx.id)
        else {
            return;
        };

        match self.source.delete_transaction(id).await {
            Ok(()) => tracing::info!(id, "transaction deleted"),
            Err(err) => self.state.banner = Some(err.message()),
        }
        self.refresh().await;
    }

    async fn handle_transaction_form(&mut self, action: AppAction) {
        let Mode::Transaction(form) = &mut self.state.mode else {
            return;
        };

        match action {
            AppAction::Cancel => self.state.mode = Mode::Browse,
            AppAction::NextField | AppAction::Down => form.next_field(),
            AppAction::PrevField | AppAction::Up => form.prev_field(),
            AppAction::Backspace => form.backspace(),
            AppAction::Input(ch) => form.input(ch),
            AppAction::Submit => {
                if !form.is_submittable() {
                    return;
                }
                let draft = form.draft();
                let result = match form.editing {
                    Some(id) => self.source.update_transaction(id, &draft).await,
                    None => self.source.add_transaction(&draft).await,
                };
                match result {
                    Ok(()) => {
                        tracing::info!(description = %draft.description, "transaction saved");
                        self.state.mode = Mode::Browse;
                        self.refresh().await;
                    }
                    Err(err) => self.state.banner = Some(err.message()),
                }
            }
            AppAction::Quit | AppAction::None => {}
        }
    }

    async fn handle_goals_form(&mut self, action: AppAction) {
        let Mode::Goals(form) = &mut self.state.mode else {
            return;
        };

        match action {
            AppAction::Cancel => self.state.mode = Mode::Browse,
            AppAction::NextField | AppAction::Down => form.next_field(),
            AppAction::PrevField | AppAction::Up => form.prev_field(),
            AppAction::Backspace => form.backspace(),
            AppAction::Input(ch) => form.input(ch),
            AppAction::Submit => {
                let Some(goals) = form.goals() else {
                    return;
                };
                match self.source.save_goals(&goals).await {
                    Ok(()) => {
                        tracing::info!("budget goals saved");
                        self.state.mode = Mode::Browse;
                        self.refresh().await;
                    }
                    Err(err) => self.state.banner = Some(err.message()),
                }
            }
            AppAction::Quit | AppAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use api_types::budget::AllocationStatus;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    async fn offline_app() -> App {
        let mut app = App::with_source(
            DataSource::Local(LocalStore::with_sample_data(Tz::UTC)),
            Tz::UTC,
        );
        app.refresh().await;
        app
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).await;
    }

    async fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch)).await;
        }
    }

    #[tokio::test]
    async fn number_keys_and_tab_switch_tabs() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('3')).await;
        assert_eq!(app.state.tab, Tab::Health);
        press(&mut app, KeyCode::Tab).await;
        assert_eq!(app.state.tab, Tab::Dashboard);
        press(&mut app, KeyCode::Char('2')).await;
        assert_eq!(app.state.tab, Tab::Transactions);
    }

    #[tokio::test]
    async fn window_keys_refetch_with_new_period() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('y')).await;
        assert_eq!(app.state.period, Period::Year);
        assert_eq!(app.state.data.overview.period, Period::Year);
        press(&mut app, KeyCode::Char('6')).await;
        assert_eq!(app.state.data.overview.period, Period::SixMonths);
    }

    #[tokio::test]
    async fn c_toggles_spending_view_and_x_clears_banner() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('c')).await;
        assert_eq!(app.state.spending_view, SpendingView::List);

        app.state.banner = Some("Server unreachable".to_string());
        press(&mut app, KeyCode::Char('x')).await;
        assert!(app.state.banner.is_none());
    }

    #[tokio::test]
    async fn add_form_saves_and_closes() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('2')).await;
        press(&mut app, KeyCode::Char('a')).await;
        assert!(matches!(app.state.mode, Mode::Transaction(_)));

        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "Coffee q").await;
        press(&mut app, KeyCode::Tab).await;
        type_text(&mut app, "4.50").await;
        press(&mut app, KeyCode::Enter).await;

        assert!(matches!(app.state.mode, Mode::Browse));
        assert_eq!(app.state.data.transactions.len(), 8);
        assert_eq!(app.state.data.transactions[0].description, "Coffee q");
        assert_eq!(app.state.data.transactions[0].amount_minor, -450);
    }

    #[tokio::test]
    async fn invalid_submit_keeps_form_open() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('2')).await;
        press(&mut app, KeyCode::Char('a')).await;
        press(&mut app, KeyCode::Enter).await;

        assert!(matches!(app.state.mode, Mode::Transaction(_)));
        assert!(app.state.banner.is_none());
        assert_eq!(app.state.data.transactions.len(), 7);

        press(&mut app, KeyCode::Esc).await;
        assert!(matches!(app.state.mode, Mode::Browse));
    }

    #[tokio::test]
    async fn edit_and_delete_act_on_selected_row() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('2')).await;
        press(&mut app, KeyCode::Down).await;
        let id = app.state.data.transactions[1].id;

        press(&mut app, KeyCode::Char('e')).await;
        let Mode::Transaction(form) = &app.state.mode else {
            panic!("expected the transaction form");
        };
        assert_eq!(form.editing, Some(id));
        press(&mut app, KeyCode::Esc).await;

        press(&mut app, KeyCode::Char('d')).await;
        assert_eq!(app.state.data.transactions.len(), 6);
        assert!(app.state.data.transactions.iter().all(|tx| tx.id != id));
    }

    #[tokio::test]
    async fn goals_editor_saves_new_income() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('3')).await;
        press(&mut app, KeyCode::Char('e')).await;
        for _ in 0.."5200.00".len() {
            press(&mut app, KeyCode::Backspace).await;
        }
        type_text(&mut app, "6000").await;
        press(&mut app, KeyCode::Enter).await;

        assert!(matches!(app.state.mode, Mode::Browse));
        assert_eq!(app.state.data.goals.goals.monthly_income_minor, 600_000);
        assert_eq!(
            app.state.data.goals.allocation.status,
            AllocationStatus::Unallocated {
                amount_minor: 80_000
            }
        );
    }

    #[tokio::test]
    async fn q_quits_only_outside_forms() {
        let mut app = offline_app().await;
        press(&mut app, KeyCode::Char('2')).await;
        press(&mut app, KeyCode::Char('a')).await;
        press(&mut app, KeyCode::Char('q')).await;
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc).await;
        press(&mut app, KeyCode::Char('q')).await;
        assert!(app.should_quit);
    }
}
