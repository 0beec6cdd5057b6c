//! Project filter, skill categories, statistics and the preloader, driven
//! end to end through `PortfolioApp`.

use folio::Error;
use folio::app::commands::UiCommand;
use folio::app::events::ViewEvent;
use folio::events::{Event, Target};
use folio::fsm::PhaseId;
use folio::scheduler::TimerPurpose;
use folio::store::{Field, Filter, ItemKind, SelectionValue};

use super::mock_platform::{MockPlatform, boot, boot_quiet, quiet_config};

fn click(target: Target) -> Event {
    Event::Click(target)
}

// ── Project filter ────────────────────────────────────────────

#[test]
fn filter_fades_then_removes_hidden_cards() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();

    app.dispatch(click(Target::FilterButton("web".into())), &mut platform)
        .unwrap();

    assert_eq!(
        platform.events.first(),
        Some(&ViewEvent::FilterActivated(Filter::parse("web")))
    );
    assert!(platform.contains(&ViewEvent::ItemFading("p-robot".into())));
    assert_eq!(
        app.store().visible_ids(ItemKind::Project),
        vec!["p-web", "p-dash"]
    );

    app.advance(299, &mut platform).unwrap();
    assert!(!platform.contains(&ViewEvent::ItemRemoved("p-robot".into())));
    app.advance(1, &mut platform).unwrap();
    assert_eq!(platform.count(&ViewEvent::ItemRemoved("p-robot".into())), 1);
}

#[test]
fn rapid_filter_changes_keep_one_fade_timer() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(click(Target::FilterButton("web".into())), &mut platform)
        .unwrap();
    app.advance(100, &mut platform).unwrap();
    app.dispatch(click(Target::FilterButton("robotics".into())), &mut platform)
        .unwrap();
    assert_eq!(app.timers().live_with(TimerPurpose::FilterFade), 1);

    app.advance(300, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::ItemRemoved("p-web".into())));
    assert!(platform.contains(&ViewEvent::ItemRemoved("p-dash".into())));
    // p-robot came back before its fade finished.
    assert!(!platform.contains(&ViewEvent::ItemRemoved("p-robot".into())));
    assert_eq!(app.timers().live_with(TimerPurpose::FilterFade), 0);
}

#[test]
fn repeated_click_does_not_extend_a_running_fade() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(click(Target::FilterButton("web".into())), &mut platform)
        .unwrap();
    app.advance(200, &mut platform).unwrap();
    app.dispatch(click(Target::FilterButton("web".into())), &mut platform)
        .unwrap();

    app.advance(99, &mut platform).unwrap();
    assert!(!platform.contains(&ViewEvent::ItemRemoved("p-robot".into())));
    app.advance(1, &mut platform).unwrap();
    assert_eq!(platform.count(&ViewEvent::ItemRemoved("p-robot".into())), 1);
    assert_eq!(app.timers().live_with(TimerPurpose::FilterFade), 0);
}

#[test]
fn all_filter_shows_everything_again() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.handle_command(UiCommand::FilterProjects("web".into()), &mut platform)
        .unwrap();
    app.handle_command(UiCommand::FilterProjects("all".into()), &mut platform)
        .unwrap();
    assert!(platform.contains(&ViewEvent::ItemShown("p-robot".into())));
    assert_eq!(app.stats().visible_projects, 3);
}

#[test]
fn unknown_filter_is_ignored_in_lenient_mode() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    platform.clear();
    app.dispatch(click(Target::FilterButton("cobol".into())), &mut platform)
        .unwrap();
    assert_eq!(app.selection().project_filter, Filter::All);
    assert!(platform.events.is_empty());
}

#[test]
fn unknown_filter_fails_in_strict_mode() {
    let mut config = quiet_config();
    config.strict_selection = true;
    let mut platform = MockPlatform::new();
    let mut app = boot(config, &mut platform);

    let result = app.handle_command(UiCommand::FilterProjects("cobol".into()), &mut platform);
    assert_eq!(
        result,
        Err(Error::InvalidSelection {
            field: Field::ProjectFilter
        })
    );
    assert_eq!(app.selection().project_filter, Filter::All);
}

// ── Skills ────────────────────────────────────────────────────

#[test]
fn skill_tab_animates_counters_to_new_stats() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    assert_eq!(platform.last_stat("avgProficiency").as_deref(), Some("75"));

    app.dispatch(click(Target::SkillTab("programming".into())), &mut platform)
        .unwrap();
    assert!(platform.contains(&ViewEvent::SkillTabActivated(Filter::parse("programming"))));
    assert!(platform.contains(&ViewEvent::ItemFading("s-react".into())));
    assert_eq!(app.stats().avg_proficiency, 80.0);

    app.advance(500, &mut platform).unwrap();
    assert_eq!(platform.last_stat("avgProficiency").as_deref(), Some("79"));

    app.advance(600, &mut platform).unwrap();
    assert_eq!(platform.last_stat("avgProficiency").as_deref(), Some("80"));
    assert_eq!(platform.last_stat("count").as_deref(), Some("3"));
    assert_eq!(platform.last_stat("avgExperience").as_deref(), Some("4.0"));
    assert_eq!(platform.last_stat("specialtyCount").as_deref(), Some("1"));
    assert_eq!(app.timers().live_with(TimerPurpose::CounterFrame), 0);
}

#[test]
fn revealed_skill_bar_fills_once_and_glows() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);

    app.dispatch(Event::ItemRevealed("s-cpp".into()), &mut platform)
        .unwrap();
    app.advance(400, &mut platform).unwrap();
    let filled = ViewEvent::SkillBarFilled {
        id: "s-cpp".into(),
        width: 90.0,
    };
    assert_eq!(platform.count(&filled), 1);
    assert!(platform.contains(&ViewEvent::SkillBarGlow {
        id: "s-cpp".into(),
        on: true
    }));

    app.advance(1000, &mut platform).unwrap();
    assert!(platform.contains(&ViewEvent::SkillBarGlow {
        id: "s-cpp".into(),
        on: false
    }));

    app.dispatch(Event::ItemRevealed("s-cpp".into()), &mut platform)
        .unwrap();
    app.advance(1000, &mut platform).unwrap();
    assert_eq!(platform.count(&filled), 1);
}

#[test]
fn revealing_a_project_card_fills_nothing() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.dispatch(Event::ItemRevealed("p-web".into()), &mut platform)
        .unwrap();
    app.advance(1000, &mut platform).unwrap();
    assert!(
        !platform
            .events
            .iter()
            .any(|e| matches!(e, ViewEvent::SkillBarFilled { .. }))
    );
}

// ── Deferred writes ───────────────────────────────────────────

#[test]
fn deferred_selection_lands_on_next_turn() {
    let mut platform = MockPlatform::new();
    let mut app = boot_quiet(&mut platform);
    app.request_selection(
        Field::SkillCategory,
        SelectionValue::Filter(Filter::parse("web")),
    )
    .unwrap();
    assert_eq!(app.selection().skill_category, Filter::All);

    app.dispatch(Event::DocumentReady, &mut platform).unwrap();
    assert_eq!(app.selection().skill_category, Filter::parse("web"));
}

// ── Preloader ─────────────────────────────────────────────────

#[test]
fn preloader_runs_its_full_lifecycle() {
    let mut config = quiet_config();
    config.features.preloader = true;
    let mut platform = MockPlatform::new();
    let mut app = boot(config, &mut platform);
    assert_eq!(app.preloader_phase(), Some(PhaseId::Loading));

    // Five ticks of at most 15 % each cannot complete the bar.
    app.advance(1000, &mut platform).unwrap();
    let progress: Vec<f64> = platform
        .events
        .iter()
        .filter_map(|e| match e {
            ViewEvent::PreloaderProgress(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(progress.len(), 5);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert!(progress.iter().all(|p| (0.0..=100.0).contains(p)));

    app.dispatch(Event::WindowLoaded, &mut platform).unwrap();
    assert_eq!(app.preloader_phase(), Some(PhaseId::Settling));

    app.advance(1000, &mut platform).unwrap();
    assert_eq!(app.preloader_phase(), Some(PhaseId::Fading));
    assert_eq!(platform.count(&ViewEvent::PreloaderHidden), 1);

    app.advance(500, &mut platform).unwrap();
    assert_eq!(app.preloader_phase(), Some(PhaseId::Removed));
    assert_eq!(platform.count(&ViewEvent::PreloaderRemoved), 1);
    assert_eq!(app.timers().live_with(TimerPurpose::PreloaderProgress), 0);
    assert_eq!(app.timers().live_with(TimerPurpose::PreloaderPhase), 0);
}

#[test]
fn disabled_preloader_has_no_phase() {
    let mut platform = MockPlatform::new();
    let app = boot_quiet(&mut platform);
    assert_eq!(app.preloader_phase(), None);
    assert_eq!(app.timers().live_with(TimerPurpose::PreloaderProgress), 0);
}
