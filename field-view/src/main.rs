//! Application entry point for the ambient particle field viewer.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`FieldView`] from the `viewer` module.

mod viewer;

use viewer::FieldView;

/// Starts the native eframe application.
///
/// This function configures [`eframe::NativeOptions`] with default
/// settings and launches the main window titled `"Ambient Particle Field"`.
/// All state and rendering are handled by [`FieldView`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Ambient Particle Field",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(FieldView::new()))
        }),
    )
}
