//! Carousel, modal, theme, responsive mode, contact form and scroll
//! widgets against the mock platform.

use folio::Error;
use folio::app::commands::UiCommand;
use folio::app::events::ViewEvent;
use folio::app::ports::TransportError;
use folio::app::service::{Collaborators, PortfolioApp};
use folio::controllers::contact::ContactForm;
use folio::controllers::modal::{ModalKind, ModalState};
use folio::events::{Event, Key, Region, Target};
use folio::scheduler::TimerPurpose;
use folio::store::{Theme, ViewportMode};

use super::mock_platform::{
    MOBILE, MockPlatform, boot, boot_quiet, quiet_config, sample_document,
};

fn form() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi & bye".into(),
        message: "Line one\nLine two".into(),
    }
}

// ── Carousel ──────────────────────────────────────────────────

#[test]
fn carousel_navigation_wraps() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.handle_command(UiCommand::GotoTestimonial(2), &mut platform)
        .unwrap();
    app.handle_command(UiCommand::NextTestimonial, &mut platform)
        .unwrap();
    assert_eq!(app.selection().testimonial_index, 3);

    app.dispatch(Event::Click(Target::CarouselDot(0)), &mut platform)
        .unwrap();
    app.dispatch(Event::Click(Target::CarouselPrevious), &mut platform)
        .unwrap();
    assert_eq!(app.selection().testimonial_index, 4);
    assert_eq!(platform.events.last(), Some(&ViewEvent::TestimonialShown(4)));

    app.dispatch(Event::Click(Target::CarouselNext), &mut platform)
        .unwrap();
    assert_eq!(app.selection().testimonial_index, 0);
}

#[test]
fn carousel_auto_advances_every_five_seconds() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    assert_eq!(app.timers().live_with(TimerPurpose::CarouselAdvance), 1);

    app.advance(4999, &mut platform).unwrap();
    assert_eq!(app.selection().testimonial_index, 0);
    app.advance(1, &mut platform).unwrap();
    assert_eq!(app.selection().testimonial_index, 1);
    app.advance(5000, &mut platform).unwrap();
    assert_eq!(app.selection().testimonial_index, 2);
}

#[test]
fn hover_pauses_and_resume_arms_exactly_one_timer() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(Event::PointerEnter(Region::Carousel), &mut platform)
        .unwrap();
    assert!(app.carousel_paused());
    assert_eq!(app.timers().live_with(TimerPurpose::CarouselAdvance), 0);
    app.advance(20_000, &mut platform).unwrap();
    assert_eq!(app.selection().testimonial_index, 0);

    for _ in 0..3 {
        app.dispatch(Event::PointerLeave(Region::Carousel), &mut platform)
            .unwrap();
        app.dispatch(Event::PointerEnter(Region::Carousel), &mut platform)
            .unwrap();
    }
    app.dispatch(Event::PointerLeave(Region::Carousel), &mut platform)
        .unwrap();
    assert_eq!(app.timers().live_with(TimerPurpose::CarouselAdvance), 1);

    app.advance(5000, &mut platform).unwrap();
    assert_eq!(app.selection().testimonial_index, 1);
}

#[test]
fn testimonials_feature_off_means_no_carousel() {
    let mut config = quiet_config();
    config.features.testimonials = false;
    let mut platform = MockPlatform::new();
    let mut app = boot(config, &mut platform);

    assert_eq!(app.store().testimonial_count(), 0);
    assert_eq!(app.timers().live_with(TimerPurpose::CarouselAdvance), 0);
    app.handle_command(UiCommand::NextTestimonial, &mut platform)
        .unwrap();
    assert_eq!(app.selection().testimonial_index, 0);
}

// ── Modal ─────────────────────────────────────────────────────

#[test]
fn second_modal_is_rejected_and_close_unlocks_once() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.handle_command(UiCommand::OpenDemo("x".into()), &mut platform)
        .unwrap();
    let second = app.handle_command(UiCommand::ViewCertificate("y.png".into()), &mut platform);
    assert_eq!(
        second,
        Err(Error::AlreadyOpen {
            open: ModalKind::Demo
        })
    );
    assert_eq!(app.modal(), &ModalState::DemoOpen("x".into()));

    app.handle_command(UiCommand::CloseModal, &mut platform)
        .unwrap();
    app.handle_command(UiCommand::CloseModal, &mut platform)
        .unwrap();
    assert_eq!(platform.scroll_locks, vec![true, false]);
    assert_eq!(platform.count(&ViewEvent::ModalClosed), 1);
}

#[test]
fn every_close_trigger_restores_scroll() {
    let triggers = [
        Event::KeyDown(Key::Escape),
        Event::Click(Target::ModalBackdrop),
        Event::Click(Target::ModalClose),
    ];
    for trigger in triggers {
        let mut platform = MockPlatform::new();
        let mut app = boot_quiet(&mut platform);
        app.dispatch(Event::Click(Target::DemoLink("fire-robot".into())), &mut platform)
            .unwrap();
        // A second click while open is dropped, not surfaced.
        app.dispatch(Event::Click(Target::DemoLink("fire-robot".into())), &mut platform)
            .unwrap();
        app.dispatch(trigger, &mut platform).unwrap();
        assert_eq!(app.modal(), &ModalState::None);
        assert_eq!(platform.scroll_locks, vec![true, false]);
    }
}

#[test]
fn demo_modal_resolves_catalogue_entry() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.handle_command(UiCommand::OpenDemo("fire-robot".into()), &mut platform)
        .unwrap();
    let view = platform
        .events
        .iter()
        .find_map(|e| match e {
            ViewEvent::ModalOpened(view) => Some(view.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(view.title, "Fire Detection Robot Demo");
    assert_eq!(view.tags.len(), 4);
}

#[test]
fn pdf_certificate_opens_a_tab_without_modal() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.dispatch(Event::Click(Target::Certificate("docs/cv.PDF".into())), &mut platform)
        .unwrap();
    assert_eq!(platform.tabs, vec!["docs/cv.PDF".to_owned()]);
    assert_eq!(app.modal(), &ModalState::None);
    assert!(platform.scroll_locks.is_empty());
}

// ── Theme ─────────────────────────────────────────────────────

#[test]
fn theme_toggle_persists_and_survives_reload() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    assert_eq!(app.selection().theme, Theme::Dark);

    app.dispatch(Event::Click(Target::ThemeToggle), &mut platform)
        .unwrap();
    assert_eq!(
        platform.storage_writes,
        vec![("theme-preference".to_owned(), "light".to_owned())]
    );
    assert!(platform.contains(&ViewEvent::ThemeApplied(Theme::Light)));

    assert!(platform.contains(&ViewEvent::ThemeTogglePressed(true)));
    app.advance(150, &mut platform).unwrap();
    assert_eq!(platform.events.last(), Some(&ViewEvent::ThemeTogglePressed(false)));

    // Same storage, fresh page.
    let mut reloaded = MockPlatform::new();
    reloaded.storage = platform.storage.clone();
    let app = boot_quiet(&mut reloaded);
    assert_eq!(app.selection().theme, Theme::Light);
    assert_eq!(reloaded.events.first(), Some(&ViewEvent::ThemeApplied(Theme::Light)));
}

#[test]
fn garbage_stored_theme_falls_back_to_dark() {
    let mut platform = MockPlatform::with_theme("sepia");
    let app = boot_quiet(&mut platform);
    assert_eq!(app.selection().theme, Theme::Dark);
}

// ── Responsive ────────────────────────────────────────────────

#[test]
fn resize_is_debounced_into_one_mode_switch() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();

    for width in [900, 700, 600, 500] {
        app.dispatch(Event::Resize { width, height: 800 }, &mut platform)
            .unwrap();
        app.advance(100, &mut platform).unwrap();
    }
    assert_eq!(app.selection().viewport_mode, ViewportMode::Desktop);

    app.advance(50, &mut platform).unwrap();
    assert_eq!(app.selection().viewport_mode, ViewportMode::Mobile);
    assert_eq!(platform.count(&ViewEvent::PerformanceMode(true)), 1);
    assert!(!app.effects().is_enabled());
}

#[test]
fn resize_within_one_mode_is_not_announced() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();

    for width in [1100, 1000] {
        app.dispatch(Event::Resize { width, height: 800 }, &mut platform)
            .unwrap();
        app.advance(150, &mut platform).unwrap();
    }
    assert_eq!(app.selection().viewport_mode, ViewportMode::Desktop);
    assert!(
        !platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::PerformanceMode(_)))
    );
    assert!(app.effects().is_enabled());
}

#[test]
fn mobile_boot_starts_in_performance_mode() {
    let mut platform = MockPlatform::new();
    let app = PortfolioApp::new(
        quiet_config(),
        sample_document(),
        MOBILE,
        Collaborators::default(),
        &mut platform,
    )
    .unwrap();
    assert_eq!(app.selection().viewport_mode, ViewportMode::Mobile);
    assert!(platform.contains(&ViewEvent::PerformanceMode(true)));
}

// ── Contact form ──────────────────────────────────────────────

#[test]
fn successful_submission_resets_form() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(Event::FormSubmit(form()), &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::FormSending));
    assert!(app.is_sending());
    assert_eq!(platform.sent.len(), 1);
    assert_eq!(platform.sent[0].field("entry.166786655"), Some("Ada"));

    // Double submit while in flight is ignored.
    app.dispatch(Event::FormSubmit(form()), &mut platform).unwrap();
    assert_eq!(platform.sent.len(), 1);

    app.dispatch(Event::SubmissionSettled(Ok(())), &mut platform)
        .unwrap();
    assert!(!app.is_sending());
    assert!(platform.contains(&ViewEvent::SuccessMessage(true)));
    assert!(platform.contains(&ViewEvent::FormReset));
    assert!(platform.mail_links.is_empty());

    app.advance(4999, &mut platform).unwrap();
    assert_eq!(platform.count(&ViewEvent::SuccessMessage(false)), 0);
    app.advance(1, &mut platform).unwrap();
    assert_eq!(platform.count(&ViewEvent::SuccessMessage(false)), 1);
}

#[test]
fn rejected_send_falls_back_to_one_mail_link() {
    let mut platform = MockPlatform::new();
    platform.reject_sends = Some(TransportError::Rejected);
    let mut app = boot_quiet(&mut platform);

    let result = app.dispatch(Event::FormSubmit(form()), &mut platform);
    assert!(result.is_ok());
    assert_eq!(platform.mail_links.len(), 1);
    let link = &platform.mail_links[0];
    assert!(link.starts_with("mailto:hello@example.com?subject=Hi%20%26%20bye&body="));
    assert!(link.contains("Name%3A%20Ada%0AEmail%3A%20ada%40example.com"));
    assert!(platform.contains(&ViewEvent::SuccessMessage(true)));
    assert!(!app.is_sending());
}

#[test]
fn late_transport_failure_also_falls_back_once() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.dispatch(Event::FormSubmit(form()), &mut platform).unwrap();
    app.dispatch(
        Event::SubmissionSettled(Err(TransportError::TimedOut)),
        &mut platform,
    )
    .unwrap();
    // A stray second settlement does nothing.
    app.dispatch(
        Event::SubmissionSettled(Err(TransportError::TimedOut)),
        &mut platform,
    )
    .unwrap();
    assert_eq!(platform.mail_links.len(), 1);
}

// ── Scroll ────────────────────────────────────────────────────

#[test]
fn scroll_drives_progress_navbar_and_back_to_top() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();

    let scroll = |offset| Event::Scroll {
        offset,
        viewport_height: 800.0,
        document_height: 2400.0,
    };
    app.dispatch(scroll(150.0), &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::NavbarScrolled(true)));
    assert!(!platform.contains(&ViewEvent::BackToTopVisible(true)));

    app.dispatch(scroll(400.0), &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::BackToTopVisible(true)));
    assert!(platform.contains(&ViewEvent::ScrollProgress(0.25)));

    app.dispatch(Event::Click(Target::BackToTop), &mut platform)
        .unwrap();
    assert_eq!(platform.scrolled_to_top, 1);

    app.dispatch(scroll(0.0), &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::NavbarScrolled(false)));
    assert!(platform.contains(&ViewEvent::BackToTopVisible(false)));
}

// ── Anchors, skill cards and lazy images ──────────────────────

#[test]
fn anchor_link_scrolls_below_the_navbar() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(
        Event::Click(Target::Anchor {
            href: "#projects".into(),
            top: Some(1500),
        }),
        &mut platform,
    )
    .unwrap();
    app.dispatch(
        Event::Click(Target::Anchor {
            href: "#missing".into(),
            top: None,
        }),
        &mut platform,
    )
    .unwrap();
    assert_eq!(platform.scrolled_to, vec![1420]);

    let mut config = quiet_config();
    config.nav_offset_px = 0;
    let mut platform = MockPlatform::new();
    let mut app = boot(config, &mut platform);
    app.handle_command(UiCommand::ScrollToSection { top: 640 }, &mut platform)
        .unwrap();
    assert_eq!(platform.scrolled_to, vec![640]);
}

#[test]
fn skill_card_tap_toggles_info_on_mobile_only() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.dispatch(Event::Click(Target::SkillCard("s-rust".into())), &mut platform)
        .unwrap();
    assert!(
        !platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::SkillInfoToggled { .. }))
    );

    let mut platform = MockPlatform::new();
    let mut app = PortfolioApp::new(
        quiet_config(),
        sample_document(),
        MOBILE,
        Collaborators::default(),
        &mut platform,
    )
    .unwrap();
    for _ in 0..2 {
        app.dispatch(Event::Click(Target::SkillCard("s-rust".into())), &mut platform)
            .unwrap();
    }
    let toggles: Vec<_> = platform
        .events
        .iter()
        .filter(|e| matches!(e, ViewEvent::SkillInfoToggled { .. }))
        .cloned()
        .collect();
    assert_eq!(
        toggles,
        vec![
            ViewEvent::SkillInfoToggled {
                id: "s-rust".into(),
                open: true
            },
            ViewEvent::SkillInfoToggled {
                id: "s-rust".into(),
                open: false
            },
        ]
    );
}

#[test]
fn lazy_image_loads_on_first_reveal() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();

    for _ in 0..3 {
        app.dispatch(Event::ImageRevealed("profile".into()), &mut platform)
            .unwrap();
    }
    assert_eq!(platform.count(&ViewEvent::LoadImage("profile".into())), 1);
}
