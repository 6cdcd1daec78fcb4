use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::admin::{AdminSection, AdminState};
use crate::auth::{AuthGateway, FileTokenStore, HttpAuthGateway};
use crate::config::Config;
use crate::shell::{Page, Shell};
use crate::ui::{
    AdminScreen, LandingScreen, LandingSignal, LoginScreen, LoginSignal, SignupScreen,
    SignupSignal,
};

pub struct App {
    config: Config,
    shell: Shell,
    landing: LandingScreen,
    signup: SignupScreen,
    login: LoginScreen,
    admin_state: AdminState,
    admin_screen: AdminScreen,
    gateway: Box<dyn AuthGateway>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let store = FileTokenStore::from_config(&config);
        let shell = Shell::new(Box::new(store))?;
        let gateway = HttpAuthGateway::new(&config)?;

        Ok(Self {
            config,
            shell,
            landing: LandingScreen::new(),
            signup: SignupScreen::new(),
            login: LoginScreen::new(),
            admin_state: AdminState::new(),
            admin_screen: AdminScreen::new(),
            gateway: Box::new(gateway),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            // Draw
            terminal.draw(|f| match self.shell.page() {
                Page::Landing => self.landing.render(f),
                Page::Signup => self.signup.render(f),
                Page::Login => self.login.render(f),
                Page::Admin => self.admin_screen.render(f, &self.admin_state),
            })?;

            // Handle events
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code).await?;
                    }
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    async fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match self.shell.page() {
            Page::Landing => self.handle_landing_key(code),
            Page::Signup => self.handle_signup_key(code).await?,
            Page::Login => self.handle_login_key(code).await?,
            Page::Admin => self.handle_admin_key(code)?,
        }
        Ok(())
    }

    fn handle_landing_key(&mut self, code: KeyCode) {
        match self.landing.handle_key(code) {
            LandingSignal::GetStarted => self.shell.start(),
            LandingSignal::SignIn => self.shell.sign_in(),
            LandingSignal::Quit => self.should_quit = true,
            LandingSignal::None => {}
        }
    }

    async fn handle_signup_key(&mut self, code: KeyCode) -> Result<()> {
        match self.signup.handle_key(code) {
            SignupSignal::Submit(request) => match self.gateway.sign_up(&request).await {
                Ok(response) => {
                    if let Some(token) = &response.token {
                        self.shell.store_token(token)?;
                    }
                    self.signup.form.submit_succeeded();
                    self.shell.complete_signup();
                    self.reset_auth_screens();
                }
                Err(err) => self.signup.form.submit_failed(&err),
            },
            SignupSignal::SwitchToLogin => {
                self.shell.switch_to_login();
                self.reset_auth_screens();
            }
            SignupSignal::Leave => {
                self.shell.back();
                self.reset_auth_screens();
            }
            SignupSignal::None => {}
        }
        Ok(())
    }

    async fn handle_login_key(&mut self, code: KeyCode) -> Result<()> {
        match self.login.handle_key(code) {
            LoginSignal::Submit(request) => match self.gateway.sign_in(&request).await {
                Ok(response) => {
                    if let Some(token) = &response.token {
                        self.shell.store_token(token)?;
                    }
                    self.login.form.submit_succeeded();
                    self.shell.complete_login();
                    self.reset_auth_screens();
                }
                Err(err) => self.login.form.submit_failed(&err),
            },
            LoginSignal::SwitchToSignup => {
                self.shell.switch_to_signup();
                self.reset_auth_screens();
            }
            LoginSignal::Leave => {
                self.shell.back();
                self.reset_auth_screens();
            }
            LoginSignal::None => {}
        }
        Ok(())
    }

    fn handle_admin_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Tab => self.admin_state.next_section(),
            KeyCode::BackTab => self.admin_state.prev_section(),
            KeyCode::Up => match self.admin_state.section {
                AdminSection::MenuItems => self.admin_state.select_prev_item(),
                AdminSection::Orders => self.admin_state.select_prev_order(),
                _ => {}
            },
            KeyCode::Down => match self.admin_state.section {
                AdminSection::MenuItems => self.admin_state.select_next_item(),
                AdminSection::Orders => self.admin_state.select_next_order(),
                _ => {}
            },
            KeyCode::Char(' ') => match self.admin_state.section {
                AdminSection::MenuItems => self.admin_state.toggle_availability(),
                AdminSection::Orders => self.admin_state.advance_selected_order(),
                _ => {}
            },
            KeyCode::Char('d') => {
                if self.admin_state.section == AdminSection::MenuItems {
                    self.admin_state.delete_item();
                }
            }
            KeyCode::Char('f') => {
                if self.admin_state.section == AdminSection::Orders {
                    self.admin_state.cycle_status_filter();
                }
            }
            KeyCode::Char('c') => {
                if self.admin_state.section == AdminSection::Orders {
                    self.admin_state.cancel_selected_order();
                }
            }
            KeyCode::Char('l') => {
                self.shell.logout()?;
                self.reset_auth_screens();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Drop any typed credentials once a flow ends
    fn reset_auth_screens(&mut self) {
        self.signup = SignupScreen::new();
        self.login = LoginScreen::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SignupField;
    use tempfile::TempDir;

    fn app_on_landing() -> (App, TempDir) {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data_dir = temp.path().display().to_string();
        let app = App::new(config).unwrap();
        (app, temp)
    }

    #[tokio::test]
    async fn test_leaving_signup_discards_typed_draft() {
        let (mut app, _temp) = app_on_landing();

        app.handle_key(KeyCode::Enter).await.unwrap();
        assert_eq!(app.shell.page(), Page::Signup);
        app.signup
            .form
            .set_text(SignupField::RestaurantName, "Leftover Cafe".to_string());
        app.signup
            .form
            .set_text(SignupField::Password, "stale-secret".to_string());

        app.handle_key(KeyCode::Esc).await.unwrap();
        assert_eq!(app.shell.page(), Page::Landing);

        app.handle_key(KeyCode::Enter).await.unwrap();
        assert_eq!(app.signup.form.draft().restaurant_name, "");
        assert_eq!(app.signup.form.draft().password, "");
    }

    #[tokio::test]
    async fn test_leaving_login_discards_typed_credentials() {
        let (mut app, _temp) = app_on_landing();

        app.handle_key(KeyCode::Char('l')).await.unwrap();
        assert_eq!(app.shell.page(), Page::Login);
        app.login.form.set_email("owner@menuza.app".to_string());
        app.login.form.set_password("hunter22".to_string());

        app.handle_key(KeyCode::Esc).await.unwrap();
        assert_eq!(app.shell.page(), Page::Landing);

        app.handle_key(KeyCode::Char('l')).await.unwrap();
        assert_eq!(app.login.form.email(), "");
        assert_eq!(app.login.form.password(), "");
    }

    #[tokio::test]
    async fn test_switching_forms_discards_typed_values() {
        let (mut app, _temp) = app_on_landing();

        app.handle_key(KeyCode::Enter).await.unwrap();
        app.signup
            .form
            .set_text(SignupField::Email, "typed@example.com".to_string());

        app.handle_key(KeyCode::F(3)).await.unwrap();
        assert_eq!(app.shell.page(), Page::Login);
        assert_eq!(app.signup.form.draft().email, "");

        app.login.form.set_password("half-typed".to_string());
        app.handle_key(KeyCode::F(3)).await.unwrap();
        assert_eq!(app.shell.page(), Page::Signup);
        assert_eq!(app.login.form.password(), "");
    }
}
