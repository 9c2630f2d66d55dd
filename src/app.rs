/// UI state controller
///
/// One struct owns the whole session: language, loaded scene, category text,
/// the in-flight flag, and the latest result or error. Every interaction and
/// both async suspension points (file decode, analysis call) flow through
/// `update`; the renderer only ever reads this state.

use std::collections::HashSet;
use std::path::PathBuf;

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;

use crate::analysis::{AnalysisClient, AnalysisError, AnalysisResult};
use crate::config::Config;
use crate::locale::Language;
use crate::picture::{self, LoadOutcome, LoadedImage};
use crate::ui::cards::{self, CardId};
use crate::ui::dropzone::dropzone;

/// Main application state
pub struct CepAnalyzer {
    /// Client for the analysis endpoint, built once from the startup config
    client: AnalysisClient,
    /// Active UI language
    language: Language,
    /// The loaded scene image, if any
    picture: Option<LoadedImage>,
    /// Free-text target category (no validation)
    category: String,
    /// Whether an analysis request is in flight
    is_analyzing: bool,
    /// Latest successful analysis; replaced wholesale by the next one
    result: Option<AnalysisResult>,
    /// Localized failure message from the latest failed analysis
    error: Option<&'static str>,
    /// Whether a drag currently hovers the window (presentational only)
    is_dragging: bool,
    /// Sequence number of the most recently issued image load; stale
    /// completions are discarded so the last issued load wins
    load_seq: u64,
    /// Cards the user collapsed; cleared whenever a new result arrives
    collapsed: HashSet<CardId>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the language toggle
    ToggleLanguage,
    /// User clicked the drop zone; opens the native file picker
    PickImage,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// A drag entered the window
    DragEntered,
    /// The drag left the window without dropping
    DragLeft,
    /// Background image load completed
    ImageLoaded(LoadOutcome),
    /// Category text edited
    CategoryChanged(String),
    /// User clicked the analyze button
    StartAnalysis,
    /// The analysis call finished
    AnalysisFinished(Result<AnalysisResult, AnalysisError>),
    /// User toggled one result card
    CardToggled(CardId),
}

impl CepAnalyzer {
    /// Create a new instance of the application
    pub fn new(config: Config) -> (Self, Task<Message>) {
        log::info!("session started (model: {})", config.model);

        (
            CepAnalyzer {
                client: AnalysisClient::new(&config),
                language: Language::De,
                picture: None,
                category: String::new(),
                is_analyzing: false,
                result: None,
                error: None,
                is_dragging: false,
                load_seq: 0,
                collapsed: HashSet::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleLanguage => {
                self.language = self.language.toggled();
                Task::none()
            }
            Message::PickImage => {
                let file = FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff"])
                    .pick_file();

                match file {
                    Some(path) => self.begin_load(path),
                    None => Task::none(),
                }
            }
            Message::FileDropped(path) => {
                self.is_dragging = false;
                self.begin_load(path)
            }
            Message::DragEntered => {
                self.is_dragging = true;
                Task::none()
            }
            Message::DragLeft => {
                self.is_dragging = false;
                Task::none()
            }
            Message::ImageLoaded(outcome) => {
                if outcome.seq != self.load_seq {
                    log::debug!(
                        "discarding stale image load {} (latest is {})",
                        outcome.seq,
                        self.load_seq
                    );
                    return Task::none();
                }

                // Non-image files produce no outcome at all: silent rejection
                if let Some(image) = outcome.image {
                    self.picture = Some(image);
                    self.result = None;
                    self.error = None;
                }
                Task::none()
            }
            Message::CategoryChanged(category) => {
                self.category = category;
                Task::none()
            }
            Message::StartAnalysis => {
                let Some(picture) = &self.picture else {
                    return Task::none();
                };
                if self.is_analyzing {
                    return Task::none();
                }

                self.is_analyzing = true;
                self.result = None;
                self.error = None;

                let client = self.client.clone();
                let jpeg = picture.jpeg.clone();
                let category = self.category.clone();
                let language = self.language;

                Task::perform(
                    async move { client.analyze(jpeg, category, language).await },
                    Message::AnalysisFinished,
                )
            }
            Message::AnalysisFinished(Ok(result)) => {
                self.is_analyzing = false;
                self.collapsed.clear();
                self.result = Some(result);
                Task::none()
            }
            Message::AnalysisFinished(Err(error)) => {
                self.is_analyzing = false;
                self.result = None;
                // Reduced to exactly two user-facing messages; the detail
                // only goes to the log
                self.error = Some(match error {
                    AnalysisError::Safety => self.language.text().error_safety,
                    other => {
                        log::warn!("analysis failed: {other}");
                        self.language.text().error_general
                    }
                });
                Task::none()
            }
            Message::CardToggled(id) => {
                if !self.collapsed.remove(&id) {
                    self.collapsed.insert(id);
                }
                Task::none()
            }
        }
    }

    /// Issue an async image load tagged with a fresh sequence number
    fn begin_load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_seq += 1;
        Task::perform(picture::load(path, self.load_seq), Message::ImageLoaded)
    }

    /// Window-level drag and drop events
    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let t = self.language.text();

        let header = row![
            text(t.title).size(34),
            iced::widget::horizontal_space(),
            button(text(t.language_toggle).size(12))
                .padding([6.0, 14.0])
                .on_press(Message::ToggleLanguage),
        ]
        .align_y(Alignment::Center);

        let subtitle = text(format!(
            "{}{}{}{}.",
            t.subtitle, t.author1, t.and, t.author2
        ))
        .size(15)
        .style(text::secondary);

        let start_label = if self.is_analyzing {
            t.button_processing
        } else {
            t.button_start
        };
        let can_start = self.picture.is_some() && !self.is_analyzing;

        let mut input_column = column![
            dropzone(self.picture.as_ref(), t, self.is_dragging),
            column![
                text(t.category_label).size(11).style(text::secondary),
                text_input(t.category_placeholder, &self.category)
                    .on_input(Message::CategoryChanged)
                    .padding(10),
            ]
            .spacing(4),
            button(text(start_label).size(14))
                .padding(14)
                .width(Length::Fill)
                .on_press_maybe(can_start.then_some(Message::StartAnalysis)),
        ]
        .spacing(16)
        .width(Length::FillPortion(2));

        if let Some(error) = self.error {
            input_column = input_column.push(text(error).size(13).style(text::danger));
        }

        let results: Element<Message> = if self.is_analyzing {
            container(text(t.button_processing).size(18).style(text::secondary))
                .width(Length::Fill)
                .padding(60)
                .center_x(Length::Fill)
                .into()
        } else if let Some(result) = &self.result {
            cards::result_cards(result, t, &self.collapsed)
        } else {
            container(
                column![
                    text(t.empty_state_title).size(26).style(text::secondary),
                    text(t.empty_state_sub).size(13).style(text::secondary),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(60)
            .center_x(Length::Fill)
            .style(container::bordered_box)
            .into()
        };

        let main = row![
            input_column,
            container(results).width(Length::FillPortion(3)),
        ]
        .spacing(24);

        let footer = row![
            column![
                text(t.legal_title).size(12),
                text(t.legal_text).size(11).style(text::secondary),
            ]
            .spacing(6)
            .width(Length::Fill),
            column![
                text(t.terms_title).size(12),
                text(t.terms_text).size(11).style(text::secondary),
            ]
            .spacing(6)
            .width(Length::Fill),
        ]
        .spacing(24);

        scrollable(
            column![header, subtitle, main, footer]
                .spacing(24)
                .padding(28),
        )
        .into()
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}
