//! The marketing-site effect plan.
//!
//! This is configuration, not computation: every region the pages animate is
//! described here once, and the controller hands the definitions to the
//! backend. Mobile gets shorter reveals and no parallax.

use hashbrown::HashMap;

use crate::types::{Ease, EffectDef, Phase, PropertySet, Timing, TriggerSpec, ViewportClass};

/// Regions hidden until their scroll reveal fires.
pub const REVEAL_TARGETS: &[&str] = &[
    ".section-header",
    ".step-card",
    ".step-connector",
    ".treatment-card",
    ".testimonial-card",
    ".story-card",
    ".faq-item",
    ".blog-card",
    ".comparison-table-wrapper",
    ".treatments-info",
    ".glper-text",
    ".glper-mockup",
    ".glper-features li",
    ".app-buttons",
    ".meet-team-content",
    ".about-content",
    ".about-image",
    ".steps-cta",
];

/// Hero elements sequenced by the entrance timeline.
pub const HERO_TARGETS: &[&str] = &[
    ".hero-title",
    ".hero-subtitle",
    ".hero-cta .btn",
    ".trust-badge",
    ".hero-stat-card",
];

/// Pre-animation states, applied before anything runs so unstyled content
/// never flashes.
pub fn initial_states(viewport: ViewportClass) -> Vec<(String, PropertySet)> {
    let distance = reveal_distance(viewport);
    let mut states = Vec::new();
    states.push((
        ".hero-video".to_string(),
        PropertySet {
            scale: Some(1.1),
            ..Default::default()
        },
    ));
    for target in HERO_TARGETS {
        states.push((target.to_string(), PropertySet::opacity(0.0)));
    }
    states.push((
        ".hero-stat-card".to_string(),
        PropertySet {
            scale: Some(0.8),
            ..Default::default()
        },
    ));
    for target in REVEAL_TARGETS {
        states.push((target.to_string(), PropertySet::hidden_shifted(distance)));
    }
    states.push((
        ".treatment-card".to_string(),
        PropertySet {
            scale: Some(0.95),
            ..Default::default()
        },
    ));
    states
}

/// The reduced-motion state: everything visible, inline styles cleared.
pub fn visible_state() -> PropertySet {
    PropertySet {
        opacity: Some(1.0),
        x: None,
        y: Some(0.0),
        scale: Some(1.0),
        clear_props: true,
    }
}

fn reveal_distance(viewport: ViewportClass) -> f32 {
    match viewport {
        ViewportClass::Desktop => 40.0,
        ViewportClass::Mobile => 30.0,
    }
}

fn entrance(target: &str, to: PropertySet, timing: Timing, position: Option<&str>) -> EffectDef {
    EffectDef {
        target: target.to_string(),
        phase: Phase::Entrance,
        from: None,
        to,
        timing,
        trigger: None,
        position: position.map(str::to_string),
    }
}

fn reveal(target: &str, trigger: TriggerSpec, timing: Timing) -> EffectDef {
    EffectDef {
        target: target.to_string(),
        phase: Phase::ScrollReveal,
        from: None,
        to: PropertySet::revealed(),
        timing,
        trigger: Some(trigger),
        position: None,
    }
}

fn at(trigger: &str, start: &str) -> TriggerSpec {
    TriggerSpec {
        trigger: trigger.to_string(),
        start: start.to_string(),
        ..Default::default()
    }
}

fn parallax(target: &str, y: f32, trigger: &str, start: &str, scrub: f32) -> EffectDef {
    EffectDef {
        target: target.to_string(),
        phase: Phase::Parallax,
        from: None,
        to: PropertySet {
            y: Some(y),
            ..Default::default()
        },
        timing: Timing {
            ease: Ease::None,
            ..Default::default()
        },
        trigger: Some(TriggerSpec {
            trigger: trigger.to_string(),
            start: start.to_string(),
            end: Some("bottom top".to_string()),
            scrub: Some(scrub),
            ..Default::default()
        }),
        position: None,
    }
}

fn secs(duration: f32) -> Timing {
    Timing {
        duration,
        ..Default::default()
    }
}

fn staggered(duration: f32, stagger: f32) -> Timing {
    Timing {
        duration,
        stagger,
        ..Default::default()
    }
}

/// Build the full plan for a viewport class.
pub fn site_plan(viewport: ViewportClass) -> Vec<EffectDef> {
    let mut plan = Vec::new();

    // Hero entrance sequence. The video settles from its initial zoom on its
    // own; the rest overlap on the timeline.
    plan.push(entrance(
        ".hero-video",
        PropertySet {
            scale: Some(1.0),
            ..Default::default()
        },
        Timing {
            duration: 10.0,
            ease: Ease::Power1Out,
            ..Default::default()
        },
        None,
    ));
    plan.push(entrance(
        ".hero-title",
        PropertySet::revealed(),
        Timing {
            duration: 1.0,
            ease: Ease::Power3Out,
            ..Default::default()
        },
        None,
    ));
    plan.push(entrance(
        ".hero-subtitle",
        PropertySet::revealed(),
        Timing {
            duration: 0.7,
            ease: Ease::Power3Out,
            ..Default::default()
        },
        Some("-=0.5"),
    ));
    plan.push(entrance(
        ".hero-cta .btn",
        PropertySet::revealed(),
        Timing {
            duration: 0.5,
            stagger: 0.15,
            ease: Ease::Power3Out,
            ..Default::default()
        },
        Some("-=0.3"),
    ));
    plan.push(entrance(
        ".trust-badge",
        PropertySet::revealed(),
        Timing {
            duration: 0.4,
            stagger: 0.1,
            ease: Ease::Power3Out,
            ..Default::default()
        },
        Some("-=0.2"),
    ));
    plan.push(entrance(
        ".hero-stat-card",
        PropertySet {
            opacity: Some(1.0),
            scale: Some(1.0),
            ..Default::default()
        },
        Timing {
            duration: 0.6,
            stagger: 0.1,
            ease: Ease::BackOut,
            ..Default::default()
        },
        Some("-=0.3"),
    ));

    // Scroll reveals. Section headers fire once and scale with the viewport.
    let header_duration = match viewport {
        ViewportClass::Desktop => 0.8,
        ViewportClass::Mobile => 0.6,
    };
    plan.push(reveal(
        ".section-header",
        TriggerSpec {
            start: "top 85%".to_string(),
            toggle_actions: Some("play none none none".to_string()),
            ..Default::default()
        },
        secs(header_duration),
    ));
    plan.push(reveal(
        ".step-card",
        at(".steps-grid", "top 80%"),
        staggered(0.7, 0.2),
    ));
    plan.push(reveal(
        ".step-connector",
        at(".steps-grid", "top 80%"),
        Timing {
            duration: 0.5,
            stagger: 0.2,
            delay: 0.1,
            ..Default::default()
        },
    ));
    plan.push(reveal(".steps-cta", at("", "top 85%"), secs(0.6)));
    plan.push(reveal(
        ".testimonial-card",
        at(".testimonials-grid", "top 80%"),
        staggered(0.6, 0.15),
    ));
    {
        // Treatment cards also settle from their initial 0.95 scale.
        let mut def = reveal(
            ".treatment-card",
            at(".treatments-grid", "top 80%"),
            staggered(0.7, 0.2),
        );
        def.to.scale = Some(1.0);
        plan.push(def);
    }
    plan.push(reveal(
        ".comparison-table-wrapper",
        at("", "top 80%"),
        secs(0.7),
    ));
    plan.push(reveal(".treatments-info", at("", "top 85%"), secs(0.6)));
    plan.push(reveal(
        ".story-card",
        at(".stories-grid", "top 80%"),
        staggered(0.6, 0.15),
    ));
    plan.push(reveal(".glper-text", at("", "top 80%"), secs(0.7)));
    plan.push(reveal(
        ".glper-features li",
        at(".glper-features", "top 85%"),
        staggered(0.5, 0.1),
    ));
    plan.push(reveal(".app-buttons", at("", "top 90%"), secs(0.5)));
    plan.push(reveal(".glper-mockup", at("", "top 80%"), secs(0.8)));
    plan.push(reveal(".meet-team-content", at("", "top 80%"), secs(0.7)));
    plan.push(reveal(".about-content", at("", "top 80%"), secs(0.7)));
    plan.push(reveal(".about-image", at("", "top 80%"), secs(0.7)));
    plan.push(reveal(
        ".faq-item",
        at(".faq-grid", "top 80%"),
        staggered(0.5, 0.08),
    ));
    plan.push(reveal(
        ".blog-card",
        at(".blog-grid", "top 80%"),
        staggered(0.6, 0.15),
    ));

    // Parallax is desktop-only; scroll-tied transforms are dropped on mobile
    // for performance.
    if viewport == ViewportClass::Desktop {
        plan.push(parallax(".hero-video", 100.0, ".hero", "top top", 1.0));
        plan.push(parallax(".hero-wave svg", -50.0, ".hero", "top top", 1.0));
        plan.push(parallax(".section-tag", -15.0, "", "top bottom", 0.5));
        plan.push(parallax(".phone-frame", -30.0, ".glper-app", "top bottom", 1.0));
        plan.push(parallax(".hero-stat-card", -10.0, ".hero", "top top", 1.0));
    }

    // Counters run even under reduced motion; they are not motion-heavy.
    plan.push(EffectDef {
        target: "[data-count]".to_string(),
        phase: Phase::Counter,
        from: None,
        to: PropertySet::default(),
        timing: secs(2.0),
        trigger: Some(TriggerSpec {
            start: "top 85%".to_string(),
            once: true,
            ..Default::default()
        }),
        position: None,
    });

    // Chart path draw-in.
    plan.push(EffectDef {
        target: ".app-chart svg path:first-child".to_string(),
        phase: Phase::ChartDraw,
        from: None,
        to: PropertySet::default(),
        timing: Timing {
            duration: 2.0,
            ease: Ease::Power2InOut,
            ..Default::default()
        },
        trigger: Some(TriggerSpec {
            trigger: ".glper-app".to_string(),
            start: "top 60%".to_string(),
            once: true,
            ..Default::default()
        }),
        position: None,
    });

    plan
}

/// Group a plan by phase, preserving order within each group.
pub fn plan_by_phase(plan: &[EffectDef]) -> HashMap<Phase, Vec<EffectDef>> {
    let mut groups: HashMap<Phase, Vec<EffectDef>> = HashMap::new();
    for def in plan {
        groups.entry(def.phase).or_default().push(def.clone());
    }
    groups
}
