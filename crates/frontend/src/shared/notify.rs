/// Blocking browser notification (`window.alert`)
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("alert without window: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", err);
    }
}
