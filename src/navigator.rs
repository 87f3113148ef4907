//! Screen navigation
//!
//! The navigator owns the single live [`Screen`] and the last submitted
//! [`Birthday`]. Every screen change goes through [`Navigator::transition`],
//! which loads the target's background first and falls back to the title
//! screen if that fails.

use log::{debug, warn};

use crate::assets::{Backdrop, BIRTHDAY_IMAGE, TITLE_IMAGE};
use crate::context::AppContext;
use crate::error::AppError;
use crate::messages::Message;
use crate::models::{Birthday, Month, Sign, TarotCard, TAROT_CARD_COUNT};
use crate::ui_state::PickerState;
use crate::utils::logging::{log_resource_failure, log_transition};
use crate::zodiac;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Title,
    BirthdayInput,
    Result,
    Tarot,
}

impl ScreenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Title => "Title",
            ScreenKind::BirthdayInput => "BirthdayInput",
            ScreenKind::Result => "Result",
            ScreenKind::Tarot => "Tarot",
        }
    }
}

/// A requested screen together with the data it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Title,
    BirthdayInput,
    Result(Sign),
    Tarot(TarotCard),
}

impl Transition {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Transition::Title => ScreenKind::Title,
            Transition::BirthdayInput => ScreenKind::BirthdayInput,
            Transition::Result(_) => ScreenKind::Result,
            Transition::Tarot(_) => ScreenKind::Tarot,
        }
    }

    pub fn image_name(&self) -> String {
        match self {
            Transition::Title => TITLE_IMAGE.to_string(),
            Transition::BirthdayInput => BIRTHDAY_IMAGE.to_string(),
            Transition::Result(sign) => sign.image_name(),
            Transition::Tarot(card) => card.image_name(),
        }
    }

    fn into_screen(self, backdrop: Backdrop) -> Screen {
        match self {
            Transition::Title => Screen::Title {
                backdrop: Some(backdrop),
            },
            Transition::BirthdayInput => Screen::BirthdayInput {
                backdrop,
                picker: PickerState::new(),
            },
            Transition::Result(sign) => Screen::Result { sign, backdrop },
            Transition::Tarot(card) => Screen::Tarot { card, backdrop },
        }
    }
}

/// What a screen wants done in response to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(Transition),
    DrawTarot,
    SelectDay(u32),
    SelectMonth(Month),
    Submit(Birthday),
}

#[derive(Debug, Clone)]
pub enum Screen {
    /// `backdrop` is `None` only when the title image itself failed to load.
    Title { backdrop: Option<Backdrop> },
    BirthdayInput { backdrop: Backdrop, picker: PickerState },
    Result { sign: Sign, backdrop: Backdrop },
    Tarot { card: TarotCard, backdrop: Backdrop },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Title { .. } => ScreenKind::Title,
            Screen::BirthdayInput { .. } => ScreenKind::BirthdayInput,
            Screen::Result { .. } => ScreenKind::Result,
            Screen::Tarot { .. } => ScreenKind::Tarot,
        }
    }

    pub fn backdrop(&self) -> Option<&Backdrop> {
        match self {
            Screen::Title { backdrop } => backdrop.as_ref(),
            Screen::BirthdayInput { backdrop, .. }
            | Screen::Result { backdrop, .. }
            | Screen::Tarot { backdrop, .. } => Some(backdrop),
        }
    }

    /// Maps a message to an action. Messages that mean nothing on this
    /// screen return `None`.
    pub fn on_event(&self, message: &Message) -> Option<Action> {
        match (self, message) {
            (Screen::Title { .. }, Message::ShowTarot) => Some(Action::DrawTarot),
            (Screen::Title { .. }, Message::ShowBirthdayInput) => {
                Some(Action::Open(Transition::BirthdayInput))
            }
            (Screen::BirthdayInput { .. }, Message::DaySelected(day)) => {
                Some(Action::SelectDay(*day))
            }
            (Screen::BirthdayInput { .. }, Message::MonthSelected(month)) => {
                Some(Action::SelectMonth(*month))
            }
            (Screen::BirthdayInput { picker, .. }, Message::SubmitBirthday) => {
                Some(Action::Submit(picker.birthday()))
            }
            (Screen::Result { .. } | Screen::Tarot { .. }, Message::Back) => {
                Some(Action::Open(Transition::Title))
            }
            _ => None,
        }
    }
}

pub struct Navigator {
    screen: Screen,
    birthday: Birthday,
}

impl Navigator {
    /// Starts on the title screen.
    pub fn new(ctx: &mut AppContext) -> Self {
        let mut navigator = Self {
            screen: Screen::Title { backdrop: None },
            birthday: Birthday::default(),
        };
        navigator.transition(Transition::Title, ctx);
        navigator
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn active(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    pub fn set_birthday(&mut self, day: u32, month: u32) {
        self.birthday = Birthday::new(day, month);
    }

    /// Sign for the stored birthday.
    pub fn sign(&self) -> Option<Sign> {
        zodiac::resolve(self.birthday.day, self.birthday.month)
    }

    pub fn handle(&mut self, message: &Message, ctx: &mut AppContext) {
        let Some(action) = self.screen.on_event(message) else {
            debug!(
                "Ignoring {:?} on {} screen",
                message,
                self.screen.kind().as_str()
            );
            return;
        };

        match action {
            Action::Open(target) => self.transition(target, ctx),
            Action::DrawTarot => self.open_tarot(ctx),
            Action::SelectDay(day) => {
                if let Screen::BirthdayInput { picker, .. } = &mut self.screen {
                    picker.select_day(day);
                }
            }
            Action::SelectMonth(month) => {
                if let Screen::BirthdayInput { picker, .. } = &mut self.screen {
                    picker.select_month(month);
                }
            }
            Action::Submit(birthday) => self.submit_birthday(birthday.day, birthday.month, ctx),
        }
    }

    /// Draws a card uniformly and shows it.
    pub fn open_tarot(&mut self, ctx: &mut AppContext) {
        let index = ctx.rng.pick(TAROT_CARD_COUNT);
        match TarotCard::from_draw(index) {
            Some(card) => {
                debug!("Drew tarot card {}", card.number());
                self.transition(Transition::Tarot(card), ctx);
            }
            None => warn!("Random source returned {} for {} cards", index, TAROT_CARD_COUNT),
        }
    }

    /// Stores the birthday and moves to its result, or reports an invalid
    /// date and stays put.
    pub fn submit_birthday(&mut self, day: u32, month: u32, ctx: &mut AppContext) {
        self.set_birthday(day, month);
        match self.sign() {
            Some(sign) => self.transition(Transition::Result(sign), ctx),
            None => {
                let err = AppError::invalid_date(format!("{}/{}", day, month));
                warn!("No sign for {}", err);
                ctx.report(&err);
            }
        }
    }

    /// Replaces the live screen with `target`.
    ///
    /// If the target's image cannot be loaded the user is told and the
    /// title screen is shown instead. A missing title image leaves the
    /// title screen without a background.
    pub fn transition(&mut self, target: Transition, ctx: &mut AppContext) {
        let name = target.image_name();
        match ctx.images.load(&name) {
            Ok(backdrop) => {
                log_transition(self.screen.kind().as_str(), target.kind().as_str());
                self.screen = target.into_screen(backdrop);
            }
            Err(err) => {
                log_resource_failure(&name, &err);
                ctx.report(&err);
                if target == Transition::Title {
                    log_transition(self.screen.kind().as_str(), ScreenKind::Title.as_str());
                    self.screen = Screen::Title { backdrop: None };
                } else {
                    self.transition(Transition::Title, ctx);
                }
            }
        }
    }
}
