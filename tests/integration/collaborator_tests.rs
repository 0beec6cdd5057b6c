//! Optional collaborators (scroll-reveal, 3D renderer) and the decorative
//! effects layered on top of the page.

use std::cell::RefCell;
use std::rc::Rc;

use folio::app::commands::UiCommand;
use folio::app::events::ViewEvent;
use folio::app::service::{Collaborators, PortfolioApp};
use folio::config::PortfolioConfig;
use folio::effects::easter_eggs::KONAMI;
use folio::events::{Event, Region, Target};
use folio::scheduler::TimerPurpose;

use super::mock_platform::{
    DESKTOP, MOBILE, MockPlatform, MockRenderer, MockReveal, RendererLog, RevealLog, boot_quiet,
    quiet_config, sample_document,
};

fn with_reveal(missing: bool, platform: &mut MockPlatform) -> (PortfolioApp, Rc<RefCell<RevealLog>>) {
    let log = Rc::new(RefCell::new(RevealLog::default()));
    let collaborators = Collaborators {
        reveal: Some(Box::new(MockReveal {
            log: Rc::clone(&log),
            missing,
        })),
        ..Collaborators::default()
    };
    let app = PortfolioApp::new(quiet_config(), sample_document(), DESKTOP, collaborators, platform)
        .unwrap();
    (app, log)
}

fn with_renderer(
    viewport: (u32, u32),
    fail: bool,
    platform: &mut MockPlatform,
) -> (PortfolioApp, Rc<RefCell<RendererLog>>) {
    let log = Rc::new(RefCell::new(RendererLog::default()));
    let collaborators = Collaborators {
        renderer: Some(Box::new(MockRenderer {
            log: Rc::clone(&log),
            fail,
        })),
        ..Collaborators::default()
    };
    let app = PortfolioApp::new(quiet_config(), sample_document(), viewport, collaborators, platform)
        .unwrap();
    (app, log)
}

// ── Scroll-reveal ─────────────────────────────────────────────

#[test]
fn reveal_initialises_once_on_document_ready() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_reveal(false, &mut platform);
    assert!(!app.reveal_ready());
    assert!(log.borrow().inits.is_empty());

    app.dispatch(Event::DocumentReady, &mut platform).unwrap();
    app.dispatch(Event::DocumentReady, &mut platform).unwrap();

    assert!(app.reveal_ready());
    let log = log.borrow();
    assert_eq!(log.inits.len(), 1);
    assert_eq!(log.inits[0], app.config().reveal);
    assert_eq!(log.inits[0].duration_ms, 1000);
    assert!(log.inits[0].once);
}

#[test]
fn filter_change_refreshes_reveal_after_delay() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_reveal(false, &mut platform);
    app.dispatch(Event::DocumentReady, &mut platform).unwrap();

    app.handle_command(UiCommand::FilterProjects("iot".into()), &mut platform)
        .unwrap();
    app.handle_command(UiCommand::FilterProjects("web".into()), &mut platform)
        .unwrap();
    assert_eq!(app.timers().live_with(TimerPurpose::RevealRefresh), 1);

    app.advance(299, &mut platform).unwrap();
    assert_eq!(log.borrow().refreshes, 0);
    app.advance(1, &mut platform).unwrap();
    assert_eq!(log.borrow().refreshes, 1);
}

#[test]
fn missing_reveal_library_is_tolerated() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_reveal(true, &mut platform);

    app.dispatch(Event::DocumentReady, &mut platform).unwrap();
    assert!(!app.reveal_ready());

    app.handle_command(UiCommand::FilterProjects("iot".into()), &mut platform)
        .unwrap();
    app.advance(1000, &mut platform).unwrap();
    assert_eq!(log.borrow().refreshes, 0);
    assert_eq!(app.selection().project_filter.as_str(), "iot");
}

// ── Particle renderer ─────────────────────────────────────────

#[test]
fn renderer_tint_follows_theme() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_renderer(DESKTOP, false, &mut platform);
    assert!(app.effects().has_particles());
    assert_eq!(log.borrow().scenes, 1);
    assert!(platform.contains(&ViewEvent::ParticlesVisible(true)));

    app.handle_command(UiCommand::ToggleTheme, &mut platform)
        .unwrap();
    assert_eq!(log.borrow().tints, vec![0x6366f1, 0x3b82f6]);
}

#[test]
fn frames_render_only_while_enabled() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_renderer(DESKTOP, false, &mut platform);

    for _ in 0..3 {
        app.animation_frame(&mut platform);
    }
    assert_eq!(log.borrow().frames, 3);

    app.dispatch(
        Event::Resize {
            width: 400,
            height: 800,
        },
        &mut platform,
    )
    .unwrap();
    app.advance(150, &mut platform).unwrap();
    assert_eq!(log.borrow().visible, vec![false]);
    assert!(platform.contains(&ViewEvent::ParticlesVisible(false)));

    app.animation_frame(&mut platform);
    assert_eq!(log.borrow().frames, 3);
}

#[test]
fn mobile_boot_hides_particles() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_renderer(MOBILE, false, &mut platform);
    assert_eq!(log.borrow().visible, vec![false]);
    assert!(platform.contains(&ViewEvent::ParticlesVisible(false)));
    app.animation_frame(&mut platform);
    assert_eq!(log.borrow().frames, 0);
}

#[test]
fn failing_renderer_leaves_page_usable() {
    let mut platform = MockPlatform::new();
    let (mut app, log) = with_renderer(DESKTOP, true, &mut platform);
    assert!(!app.effects().has_particles());
    assert!(log.borrow().tints.is_empty());
    assert!(
        !platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::ParticlesVisible(_)))
    );

    app.animation_frame(&mut platform);
    app.handle_command(UiCommand::ToggleTheme, &mut platform)
        .unwrap();
    assert_eq!(log.borrow().frames, 0);
}

// ── Cursor and typewriter ─────────────────────────────────────

#[test]
fn cursor_tracks_pointer_and_hover() {
    let mut config = quiet_config();
    config.features.cursor = true;
    let mut platform = MockPlatform::new();
    let mut app = super::mock_platform::boot(config, &mut platform);

    app.dispatch(Event::PointerMove { x: 100.0, y: 50.0 }, &mut platform)
        .unwrap();
    assert!(platform.contains(&ViewEvent::CursorMoved { x: 100.0, y: 50.0 }));

    app.dispatch(Event::PointerEnter(Region::Interactive), &mut platform)
        .unwrap();
    app.dispatch(Event::PointerEnter(Region::Interactive), &mut platform)
        .unwrap();
    assert_eq!(platform.count(&ViewEvent::CursorHover(true)), 1);

    app.animation_frame(&mut platform);
    assert!(
        platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::FollowerMoved { x, .. } if *x > 0.0 && *x < 100.0))
    );
}

#[test]
fn typewriter_starts_after_document_ready() {
    let mut config = quiet_config();
    config.features.typewriter = true;
    let mut platform = MockPlatform::new();
    let mut app = super::mock_platform::boot(config, &mut platform);

    app.advance(5000, &mut platform).unwrap();
    assert!(
        !platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::TypewriterText(_)))
    );

    app.dispatch(Event::DocumentReady, &mut platform).unwrap();
    app.advance(999, &mut platform).unwrap();
    assert!(!platform.contains(&ViewEvent::TypewriterText("I".into())));
    app.advance(1, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::TypewriterText("I".into())));
    app.advance(100, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::TypewriterText("Io".into())));
}

// ── Easter eggs ───────────────────────────────────────────────

#[test]
fn konami_code_triggers_rainbow_and_toast() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    for key in KONAMI {
        app.dispatch(Event::KeyDown(key), &mut platform).unwrap();
    }
    assert_eq!(platform.count(&ViewEvent::RainbowMode(true)), 1);
    assert!(
        platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::Notification(Some(m)) if m.starts_with("Konami")))
    );

    app.advance(2000, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::RainbowMode(false)));
    app.advance(1000, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::Notification(None)));
}

#[test]
fn triple_logo_click_starts_party() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    for _ in 0..3 {
        app.dispatch(Event::Click(Target::BrandLogo), &mut platform)
            .unwrap();
    }
    assert!(platform.contains(&ViewEvent::PartyMode(true)));
    let burst = platform.events.iter().find_map(|e| match e {
        ViewEvent::ConfettiBurst(pieces) => Some(pieces.len()),
        _ => None,
    });
    assert_eq!(burst, Some(50));

    app.advance(3000, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::ConfettiCleared));
    app.advance(2000, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::PartyMode(false)));
}

#[test]
fn slow_logo_clicks_do_not_count() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    for _ in 0..2 {
        app.dispatch(Event::Click(Target::BrandLogo), &mut platform)
            .unwrap();
    }
    app.advance(1000, &mut platform).unwrap();
    app.dispatch(Event::Click(Target::BrandLogo), &mut platform)
        .unwrap();
    assert!(!platform.contains(&ViewEvent::PartyMode(true)));
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn shutdown_cancels_everything() {
    let log = Rc::new(RefCell::new(RendererLog::default()));
    let collaborators = Collaborators {
        renderer: Some(Box::new(MockRenderer {
            log: Rc::clone(&log),
            fail: false,
        })),
        ..Collaborators::default()
    };
    let mut platform = MockPlatform::new();
    let mut app = PortfolioApp::new(
        PortfolioConfig::default(),
        sample_document(),
        DESKTOP,
        collaborators,
        &mut platform,
    )
    .unwrap();

    app.dispatch(Event::DocumentReady, &mut platform).unwrap();
    app.handle_command(UiCommand::FilterProjects("web".into()), &mut platform)
        .unwrap();
    app.handle_command(UiCommand::OpenDemo("fire-robot".into()), &mut platform)
        .unwrap();
    app.dispatch(Event::Resize { width: 500, height: 800 }, &mut platform)
        .unwrap();
    for key in KONAMI {
        app.dispatch(Event::KeyDown(key), &mut platform).unwrap();
    }
    assert!(app.timers().live_count() > 0);

    app.shutdown(&mut platform);
    assert_eq!(app.timers().live_count(), 0);
    assert_eq!(platform.scroll_locks, vec![true, false]);

    let before = platform.events.len();
    app.advance(60_000, &mut platform).unwrap();
    assert_eq!(platform.events.len(), before);
}
