//! Fuzz target: `PortfolioApp` event sequences
//!
//! Decodes arbitrary bytes into a stream of page events, commands and
//! elapsed time, drives them through the app on the headless platform and
//! asserts that:
//! - Nothing panics and the queue never overflows under one-at-a-time dispatch
//! - Scroll stays locked exactly while a modal is open
//! - The testimonial index stays in range
//! - Shutdown leaves no live timers
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use folio::adapters::headless::HeadlessPlatform;
use folio::app::commands::UiCommand;
use folio::app::service::{Collaborators, PortfolioApp};
use folio::config::PortfolioConfig;
use folio::controllers::contact::ContactForm;
use folio::events::{Event, Key, Region, Target};
use folio::store::{Document, Item};
use libfuzzer_sys::fuzz_target;

const TAGS: [&str; 5] = ["all", "iot", "web", "programming", "bogus"];

fn document() -> Document {
    Document::new(vec![
        Item::project("p0", &["iot"]),
        Item::project("p1", &["web", "iot"]),
        Item::skill("s0", "programming", 80.0, 2.0).featured(),
        Item::skill("s1", "web", 60.0, 1.0),
        Item::testimonial("t0"),
        Item::testimonial("t1"),
        Item::testimonial("t2"),
    ])
}

fn tag(b: u8) -> String {
    TAGS[usize::from(b) % TAGS.len()].to_owned()
}

fn decode(op: u8, arg: u8) -> Option<Event> {
    let event = match op % 23 {
        0 => Event::Click(Target::FilterButton(tag(arg))),
        1 => Event::Click(Target::SkillTab(tag(arg))),
        2 => Event::Click(Target::CarouselNext),
        3 => Event::Click(Target::CarouselPrevious),
        4 => Event::Click(Target::CarouselDot(usize::from(arg % 5))),
        5 => Event::Click(Target::ThemeToggle),
        6 => Event::Click(Target::DemoLink("fire-robot".into())),
        7 => Event::Click(Target::Certificate(if arg % 2 == 0 { "a.jpg" } else { "b.pdf" }.into())),
        8 => Event::Click(Target::ModalBackdrop),
        9 => Event::KeyDown(Key::from_code(["Escape", "ArrowUp", "ArrowDown", "KeyB", "KeyA"][usize::from(arg % 5)])?),
        10 => Event::PointerEnter(if arg % 2 == 0 { Region::Carousel } else { Region::Interactive }),
        11 => Event::PointerLeave(if arg % 2 == 0 { Region::Carousel } else { Region::Interactive }),
        12 => Event::PointerMove { x: f64::from(arg) * 5.0, y: f64::from(arg) * 3.0 },
        13 => Event::Scroll {
            offset: f64::from(arg) * 10.0,
            viewport_height: 800.0,
            document_height: 3000.0,
        },
        14 => Event::Resize { width: u32::from(arg) * 8, height: 800 },
        15 => Event::ItemRevealed(if arg % 2 == 0 { "s0" } else { "p1" }.into()),
        16 => Event::DocumentReady,
        17 => Event::WindowLoaded,
        18 => Event::FormSubmit(ContactForm {
            name: "n".into(),
            email: "e@example.com".into(),
            subject: "s".into(),
            message: "m".into(),
        }),
        19 => Event::Click(Target::Anchor {
            href: "#projects".into(),
            top: (arg % 3 != 0).then_some(u32::from(arg) * 10),
        }),
        20 => Event::Click(Target::SkillCard(if arg % 2 == 0 { "s0" } else { "s1" }.into())),
        21 => Event::ImageRevealed(format!("img{}", arg % 4)),
        _ => Event::Click(Target::BrandLogo),
    };
    Some(event)
}

fuzz_target!(|data: &[u8]| {
    let mut platform = HeadlessPlatform {
        offline: data.first().is_some_and(|b| b & 1 == 1),
        ..HeadlessPlatform::default()
    };
    let Ok(mut app) = PortfolioApp::new(
        PortfolioConfig::default(),
        document(),
        (1280, 800),
        Collaborators::default(),
        &mut platform,
    ) else {
        return;
    };

    for chunk in data.chunks_exact(3) {
        let (op, arg, elapsed) = (chunk[0], chunk[1], chunk[2]);
        if op >= 240 {
            let _ = app.handle_command(UiCommand::CloseModal, &mut platform);
        } else if let Some(event) = decode(op, arg) {
            app.dispatch(event, &mut platform).expect("dispatch");
        }
        app.advance(u64::from(elapsed) * 20, &mut platform).expect("advance");

        assert_eq!(platform.scroll_locked, app.modal().is_open());
        assert!(app.selection().testimonial_index < 3);
    }

    assert_eq!(app.dropped_events(), 0);
    app.shutdown(&mut platform);
    assert_eq!(app.timers().live_count(), 0);
    assert!(!platform.scroll_locked);
});
