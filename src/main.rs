//! Orb Pop entry point
//!
//! The game core is headless: a host owns the window and surface and feeds
//! taps in. This native build plays a few rounds against itself as a smoke
//! run and logs what a host would surface.

use orb_pop::GameSession;

fn main() {
    env_logger::init();
    log::info!("Orb Pop (native) starting...");

    let mut session = GameSession::with_seed(1080.0, 1920.0, 42);
    session.set_notify(|message| log::info!("{message}"));

    // Tap the first live target twice a second until round 3 is cleared
    let mut frames = 0u32;
    while session.round() <= 3 && frames < 3600 {
        session.update(1.0 / 60.0);
        if frames % 30 == 0 {
            if let Some(pos) = session.state().targets.first().map(|t| t.pos) {
                session.handle_input(pos.x, pos.y);
            }
        }
        frames += 1;
    }

    println!(
        "Played {} frames: score {}, reached round {}",
        frames,
        session.score(),
        session.round()
    );
}
