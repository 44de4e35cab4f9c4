use leptos::mount::mount_to_body;
use mingle_app::App;

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting app");
    mount_to_body(App);
}
