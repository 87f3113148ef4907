use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;
use zodiac_horoscope::{
    AppConfig, AppContext, Backdrop, ErrorReporter, FsImageLoader, ImageLoader, IndexSource,
    Message, Month, Navigator, Screen, ScreenKind, Sign, ThreadRngSource, Transition,
    AppResult, TAROT_CARD_COUNT,
};

type DialogLog = Rc<RefCell<Vec<(String, String)>>>;

struct RecordingDialogs(DialogLog);

impl ErrorReporter for RecordingDialogs {
    fn show_error(&self, title: &str, message: &str) {
        self.0.borrow_mut().push((title.to_string(), message.to_string()));
    }
}

struct SequenceSource(VecDeque<usize>);

impl IndexSource for SequenceSource {
    fn pick(&mut self, upper: usize) -> usize {
        self.0.pop_front().unwrap_or(0) % upper
    }
}

/// Always succeeds without touching disk.
struct BlankImages;

impl ImageLoader for BlankImages {
    fn load(&self, name: &str) -> AppResult<Backdrop> {
        Ok(Backdrop::from_rgba(name, 1, 1, vec![0; 4]))
    }
}

fn asset_dir(names: &[String]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        RgbaImage::from_pixel(8, 14, Rgba([255, 255, 255, 255]))
            .save(dir.path().join(name))
            .unwrap();
    }
    dir
}

fn all_image_names() -> Vec<String> {
    let mut names = vec!["Title_screen.png".to_string(), "day.png".to_string()];
    names.extend(Sign::ALL.iter().map(|s| s.image_name()));
    names.extend((1..=TAROT_CARD_COUNT).map(|n| format!("Tarot{}.png", n)));
    names
}

fn disk_context(dir: &TempDir, draws: Vec<usize>) -> (AppContext, DialogLog) {
    let log: DialogLog = Rc::new(RefCell::new(Vec::new()));
    let config = AppConfig::with_asset_dir(dir.path());
    let images = FsImageLoader::from_config(&config);
    let ctx = AppContext::new(
        config,
        Box::new(images),
        Box::new(RecordingDialogs(log.clone())),
        Box::new(SequenceSource(draws.into())),
    );
    (ctx, log)
}

fn submit(navigator: &mut Navigator, ctx: &mut AppContext, day: u32, month: Month) {
    navigator.handle(&Message::ShowBirthdayInput, ctx);
    navigator.handle(&Message::MonthSelected(month), ctx);
    navigator.handle(&Message::DaySelected(day), ctx);
    navigator.handle(&Message::SubmitBirthday, ctx);
}

#[test]
fn test_christmas_birthday_shows_capricorn() {
    let dir = asset_dir(&all_image_names());
    let (mut ctx, log) = disk_context(&dir, vec![]);
    let mut navigator = Navigator::new(&mut ctx);

    submit(&mut navigator, &mut ctx, 25, Month::December);

    match navigator.screen() {
        Screen::Result { sign, backdrop } => {
            assert_eq!(*sign, Sign::Capricorn);
            assert_eq!(backdrop.name(), "capricorn.png");
            assert_eq!(backdrop.size(), (400, 700));
        }
        other => panic!("expected result screen, got {:?}", other.kind()),
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn test_first_of_june_is_gemini() {
    let dir = asset_dir(&all_image_names());
    let (mut ctx, _log) = disk_context(&dir, vec![]);
    let mut navigator = Navigator::new(&mut ctx);

    submit(&mut navigator, &mut ctx, 1, Month::June);

    assert_eq!(navigator.sign(), Some(Sign::Gemini));
    assert!(matches!(navigator.screen(), Screen::Result { sign: Sign::Gemini, .. }));
}

#[test]
fn test_missing_sign_image_reports_and_returns_to_title() {
    let names: Vec<String> = all_image_names()
        .into_iter()
        .filter(|n| n != "virgo.png")
        .collect();
    let dir = asset_dir(&names);
    let (mut ctx, log) = disk_context(&dir, vec![]);
    let mut navigator = Navigator::new(&mut ctx);

    submit(&mut navigator, &mut ctx, 1, Month::September);

    assert_eq!(navigator.active(), ScreenKind::Title);
    assert!(navigator.screen().backdrop().is_some());
    assert_eq!(
        log.borrow().as_slice(),
        &[("Missing Image".to_string(), "virgo.png not found.".to_string())]
    );
}

#[test]
fn test_missing_tarot_image_reports_and_returns_to_title() {
    let names: Vec<String> = all_image_names()
        .into_iter()
        .filter(|n| n != "Tarot2.png")
        .collect();
    let dir = asset_dir(&names);
    let (mut ctx, log) = disk_context(&dir, vec![1, 2]);
    let mut navigator = Navigator::new(&mut ctx);

    navigator.handle(&Message::ShowTarot, &mut ctx);
    assert_eq!(navigator.active(), ScreenKind::Title);
    assert_eq!(log.borrow().len(), 1);

    navigator.handle(&Message::ShowTarot, &mut ctx);
    assert!(matches!(navigator.screen(), Screen::Tarot { card, .. } if card.number() == 3));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_empty_asset_directory_keeps_title_alive() {
    let dir = asset_dir(&[]);
    let (mut ctx, log) = disk_context(&dir, vec![]);
    let mut navigator = Navigator::new(&mut ctx);
    assert_eq!(navigator.active(), ScreenKind::Title);

    navigator.handle(&Message::ShowBirthdayInput, &mut ctx);

    assert_eq!(navigator.active(), ScreenKind::Title);
    assert!(navigator.screen().backdrop().is_none());
    // Title on launch, then day.png, then title again on recovery
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_exactly_one_screen_after_any_sequence() {
    let log: DialogLog = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = AppContext::new(
        AppConfig::with_asset_dir("unused"),
        Box::new(BlankImages),
        Box::new(RecordingDialogs(log.clone())),
        Box::new(SequenceSource((0..50).collect())),
    );
    let mut navigator = Navigator::new(&mut ctx);

    let script = [
        Message::ShowTarot,
        Message::ShowBirthdayInput,
        Message::Back,
        Message::ShowBirthdayInput,
        Message::Back,
        Message::MonthSelected(Month::February),
        Message::DaySelected(30),
        Message::SubmitBirthday,
        Message::ShowTarot,
        Message::Back,
        Message::SubmitBirthday,
        Message::Back,
    ];
    let expected = [
        ScreenKind::Tarot,
        ScreenKind::Tarot,
        ScreenKind::Title,
        ScreenKind::BirthdayInput,
        ScreenKind::BirthdayInput,
        ScreenKind::BirthdayInput,
        ScreenKind::BirthdayInput,
        ScreenKind::Result,
        ScreenKind::Result,
        ScreenKind::Title,
        ScreenKind::Title,
        ScreenKind::Title,
    ];

    for (message, kind) in script.iter().zip(expected) {
        navigator.handle(message, &mut ctx);
        assert_eq!(navigator.active(), kind, "after {:?}", message);
    }
    // The picker clamps 30 February to the 29th
    assert_eq!(navigator.birthday().day, 29);
    assert_eq!(navigator.sign(), Some(Sign::Pisces));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_direct_transition_carries_payload() {
    let log: DialogLog = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = AppContext::new(
        AppConfig::with_asset_dir("unused"),
        Box::new(BlankImages),
        Box::new(RecordingDialogs(log)),
        Box::new(ThreadRngSource),
    );
    let mut navigator = Navigator::new(&mut ctx);

    navigator.transition(Transition::Result(Sign::Libra), &mut ctx);

    match navigator.screen() {
        Screen::Result { sign, backdrop } => {
            assert_eq!(*sign, Sign::Libra);
            assert_eq!(backdrop.name(), "libra.png");
        }
        other => panic!("expected result screen, got {:?}", other.kind()),
    }
}

#[test]
fn test_tarot_draw_is_roughly_uniform() {
    let log: DialogLog = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = AppContext::new(
        AppConfig::with_asset_dir("unused"),
        Box::new(BlankImages),
        Box::new(RecordingDialogs(log)),
        Box::new(ThreadRngSource),
    );
    let mut navigator = Navigator::new(&mut ctx);
    let mut counts = [0usize; TAROT_CARD_COUNT];
    let trials = 6000;

    for _ in 0..trials {
        navigator.handle(&Message::ShowTarot, &mut ctx);
        match navigator.screen() {
            Screen::Tarot { card, .. } => counts[card.number() as usize - 1] += 1,
            other => panic!("expected tarot screen, got {:?}", other.kind()),
        }
        navigator.handle(&Message::Back, &mut ctx);
    }

    // Expected 1000 each; the bounds are many standard deviations wide
    for (idx, count) in counts.iter().enumerate() {
        assert!(
            (750..=1250).contains(count),
            "card {} drawn {} times out of {}",
            idx + 1,
            count,
            trials
        );
    }
}
