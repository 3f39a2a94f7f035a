//! End-to-end scenarios driving a full effect against the raster surface.
//!
//! These exercise the whole pipeline - clock gate, oscillator, grid scan,
//! segment geometry, gradient-sampled stroking - the way the web driver
//! does, minus the browser.

use flowfield_core::telemetry::CadenceCollector;
use flowfield_core::{
    FlowFieldEffect, Pointer, RasterSurface, Rgba, StepOutcome, TARGET_INTERVAL_MS,
};

/// Drive `effect` with constant 16ms ticks until a redraw fires.
fn tick_until_redraw(
    effect: &mut FlowFieldEffect<RasterSurface>,
    t: &mut f64,
    pointer: Pointer,
) {
    for _ in 0..10 {
        *t += 16.0;
        if effect.step(*t, pointer).redrew() {
            return;
        }
    }
    panic!("no redraw within 10 ticks");
}

#[test]
fn redraw_paints_pixels_on_raster_surface() {
    let mut effect = FlowFieldEffect::new(RasterSurface::new(120, 90), 120.0, 90.0);
    let mut t = 0.0;
    tick_until_redraw(&mut effect, &mut t, Pointer::new(60.0, 45.0));

    let surface = effect.into_surface();
    // 8x6 grid of cells, each stroking a multi-pixel segment.
    assert!(
        surface.painted() >= 48,
        "expected at least one pixel per cell, painted = {}",
        surface.painted()
    );
}

#[test]
fn strokes_sample_the_flow_gradient() {
    let mut effect = FlowFieldEffect::new(RasterSurface::new(300, 300), 300.0, 300.0);
    let mut t = 0.0;
    tick_until_redraw(&mut effect, &mut t, Pointer::new(150.0, 150.0));

    let surface = effect.into_surface();
    // Every painted pixel carries a gradient color, never the white default
    // (the gradient replaced it at construction) and never transparent.
    let mut colors = std::collections::HashSet::new();
    for &px in surface.pixels() {
        if px != Rgba::TRANSPARENT {
            assert_ne!(px, Rgba::WHITE, "stroke must use the gradient, not the default");
            colors.insert(px.0);
        }
    }
    assert!(
        colors.len() > 1,
        "a 300x300 field should cross gradient segments"
    );
}

#[test]
fn gate_skips_immediately_after_a_redraw() {
    let mut effect = FlowFieldEffect::new(RasterSurface::new(60, 60), 60.0, 60.0);
    let pointer = Pointer::new(10.0, 10.0);
    let mut t = 0.0;
    tick_until_redraw(&mut effect, &mut t, pointer);

    // The accumulator just reset to zero; the very next tick checks before
    // accumulating, so it cannot fire.
    t += 16.0;
    assert_eq!(effect.step(t, pointer), StepOutcome::Skipped);
    assert_eq!(effect.accumulated_ms(), 16.0);
}

#[test]
fn cadence_over_ten_seconds_tracks_target_rate() {
    // Drive at a native 60Hz callback rate (16.666... deltas line up with
    // the target interval). With check-before-accumulate gating, equal
    // deltas need two accumulating ticks per fire, so the effective redraw
    // rate is one third of the callback rate.
    let mut effect = FlowFieldEffect::new(RasterSurface::new(30, 30), 30.0, 30.0);
    let mut collector = CadenceCollector::new();
    let delta = TARGET_INTERVAL_MS;
    let mut t = 0.0;
    for _ in 0..600 {
        t += delta;
        let outcome = effect.step(t, Pointer::default());
        collector.record(t, outcome);
    }
    let report = collector.report();
    assert_eq!(report.ticks, 600);
    // One fire per three ticks (two accumulating ticks + the firing tick).
    let expected = 600 / 3;
    let tolerance = 10;
    assert!(
        (report.redraws as i64 - expected).abs() <= tolerance,
        "redraws = {}, expected ~{expected}",
        report.redraws
    );
}

#[test]
fn resize_rebuild_changes_grid_density() {
    let mut small = FlowFieldEffect::new(RasterSurface::new(30, 30), 30.0, 30.0);
    let mut t = 0.0;
    tick_until_redraw(&mut small, &mut t, Pointer::default());
    let small_painted = small.into_surface().painted();

    // The driver's resize path: new surface, new instance, fresh state.
    let mut large = FlowFieldEffect::new(RasterSurface::new(300, 300), 300.0, 300.0);
    assert_eq!(large.oscillator().radius(), 0.0);
    assert_eq!(large.accumulated_ms(), 0.0);
    let mut t = 0.0;
    tick_until_redraw(&mut large, &mut t, Pointer::default());
    let large_painted = large.into_surface().painted();

    assert!(
        large_painted > small_painted,
        "a larger surface paints more cells: {large_painted} vs {small_painted}"
    );
}
