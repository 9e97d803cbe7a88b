/*
 * Drift Field
 *
 * An ambient particle background: a fixed-size set of drifting points is
 * advanced and drawn once per display frame, with a connecting line for
 * every pair of particles closer than the link threshold. Themes, a control
 * panel and transient celebration bursts sit on top of the core field.
 */

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("driftfield=info")),
        )
        .init();

    nannou::app(driftfield::app::model)
        .update(driftfield::app::update)
        .run();
}
