// Zodiac Horoscope - pick a birthday, see your sign, or draw a tarot card
// Main entry point for iced application

use anyhow::Context;
use iced::{Application, Command, Element, Settings as IcedSettings, Theme};
use log::{error, info, warn};

use zodiac_horoscope::config::{validate_config, AppConfig};
use zodiac_horoscope::utils::logging::init_logging;
use zodiac_horoscope::{ui, AppContext, Message, Navigator};

pub struct ZodiacApp {
    ctx: AppContext,
    navigator: Navigator,
}

impl Application for ZodiacApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppConfig;

    fn new(config: Self::Flags) -> (Self, Command<Message>) {
        let mut ctx = AppContext::from_config(config);
        let navigator = Navigator::new(&mut ctx);

        (ZodiacApp { ctx, navigator }, Command::none())
    }

    fn title(&self) -> String {
        self.ctx.config.window_title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.navigator.handle(&message, &mut self.ctx);
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        ui::view(self.navigator.screen())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting Zodiac Horoscope");

    let config = AppConfig::load();
    if let Err(e) = validate_config(&config) {
        // Each screen reports its own missing image, so keep going
        warn!("{}", e);
    }

    let (width, height) = config.window_size();

    ZodiacApp::run(IcedSettings {
        flags: config,
        window: iced::window::Settings {
            size: iced::Size::new(width as f32, height as f32),
            resizable: false,
            ..Default::default()
        },
        id: None,
        fonts: vec![],
        default_font: Default::default(),
        default_text_size: iced::Pixels(16.0),
        antialiasing: false,
    })
    .map_err(|e| {
        error!("UI terminated with error: {}", e);
        e
    })
    .context("Failed to run the zodiac window")?;

    info!("Zodiac Horoscope closed");
    Ok(())
}
