//! # Iris Classifier GUI Application
//!
//! Desktop form for the iris prediction endpoint: four measurement fields,
//! sample presets, a classify button, and a results panel.
//! Built with Iced using the Elm architecture (State, Message, Update, View).
//!
//! All request-flow state lives in [`ClassificationFlow`]; `update` is the
//! only place it changes. The network call runs in `Task::perform` and its
//! outcome comes back as [`Message::PredictionFinished`].

mod ui;

use iced::widget::{column, container, row};
use iced::{Element, Length, Size, Task, Theme};

use iris_core::client::{log_health, HealthReport};
use iris_core::logging::{init_logging, LogConfig};
use iris_core::{
    ClassificationFlow, ClientConfig, HttpBackend, IrisError, IrisResult, MeasurementField,
    PredictionResult, RequestToken, Species,
};

pub fn main() -> iced::Result {
    if let Err(e) = init_logging(&LogConfig::default()) {
        eprintln!("{}", e);
    }

    tracing::info!("Starting Iris Classifier");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(900.0, 560.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(MeasurementField, String),
    LoadSample(Species),
    Submit,
    PredictionFinished(RequestToken, IrisResult<PredictionResult>),
    /// Start-up health check finished; `log_health` has already logged it
    HealthChecked(Option<HealthReport>),
    ToggleDarkMode,
}

pub struct App {
    flow: ClassificationFlow,
    /// Unusable configuration is kept as an error and reported on submit
    backend: IrisResult<HttpBackend>,
    endpoint: String,
    dark_mode: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        Self::with_config(ClientConfig::from_env())
    }

    fn with_config(config: IrisResult<ClientConfig>) -> (Self, Task<Message>) {
        let endpoint = match &config {
            Ok(config) => config.endpoint.clone(),
            Err(_) => "(not configured)".to_string(),
        };
        let backend = config.and_then(|config| HttpBackend::new(&config));

        // Health check is diagnostic only; its outcome is logged, never shown
        let startup = match &backend {
            Ok(backend) => {
                let backend = backend.clone();
                Task::perform(async move { log_health(&backend).await }, Message::HealthChecked)
            }
            Err(e) => {
                tracing::error!(error = %e, "Prediction client unavailable");
                Task::none()
            }
        };

        let app = App {
            flow: ClassificationFlow::new(),
            backend,
            endpoint,
            dark_mode: false,
        };
        (app, startup)
    }

    fn title(&self) -> String {
        "Iris Classifier".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.flow.set_field(field, value);
                Task::none()
            }
            Message::LoadSample(species) => {
                self.flow.load_sample(species);
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::PredictionFinished(token, outcome) => {
                self.flow.complete(token, outcome);
                Task::none()
            }
            Message::HealthChecked(_) => Task::none(),
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    /// Start a classification unless one is pending or the input is invalid
    fn submit(&mut self) -> Task<Message> {
        let pending = match self.flow.begin_submit() {
            Ok(pending) => pending,
            Err(_) => return Task::none(),
        };

        match &self.backend {
            Ok(backend) => {
                let backend = backend.clone();
                let token = pending.token;
                Task::perform(
                    async move { backend.predict(&pending.input).await },
                    move |outcome| Message::PredictionFinished(token, outcome),
                )
            }
            Err(e) => {
                let error: IrisError = e.clone();
                self.flow.complete(pending.token, Err(error));
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.dark_mode);

        let panels = row![
            ui::input_panel::view_input_panel(&self.flow),
            ui::results_panel::view_results_panel(self.flow.state()),
        ]
        .spacing(8)
        .height(Length::Fill);

        let status = ui::status_bar::view_status_bar(&self.endpoint, self.flow.state());

        container(column![header, panels, status].spacing(6))
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::UiState;

    #[test]
    fn test_misconfigured_backend_fails_submit_with_config_error() {
        let (mut app, _) = App::with_config(Err(IrisError::config("IRIS_API_URL is not a url")));
        assert_eq!(app.endpoint, "(not configured)");

        let _ = app.update(Message::LoadSample(Species::Setosa));
        let _ = app.update(Message::Submit);

        assert!(!app.flow.is_loading());
        assert!(app.flow.in_flight().is_none());
        assert_eq!(
            app.flow.state().error(),
            Some(&IrisError::config("IRIS_API_URL is not a url"))
        );
        assert!(app.flow.can_submit());
    }

    #[test]
    fn test_unusable_endpoint_is_reported_on_submit() {
        let config = ClientConfig::default().with_endpoint("ftp://example.com/predict");
        let (mut app, _) = App::with_config(Ok(config));
        assert!(app.backend.is_err());

        let _ = app.update(Message::LoadSample(Species::Virginica));
        let _ = app.update(Message::Submit);

        assert_eq!(app.flow.state().error().map(|e| e.error_code()), Some("CONFIG"));
    }

    #[test]
    fn test_invalid_input_shows_error_without_loading() {
        let (mut app, _) = App::with_config(Err(IrisError::config("unused")));
        let _ = app.update(Message::FieldChanged(MeasurementField::SepalLength, "abc".to_string()));
        let _ = app.update(Message::Submit);

        assert!(matches!(
            app.flow.state(),
            UiState::ErrorShown(IrisError::InvalidInput { .. })
        ));
    }
}
