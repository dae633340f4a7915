mod app;
mod balloon;
mod charge;
mod commands;
mod config;
mod init_config;
mod layout;
mod simulation;
mod state;

fn main() {
    app::run();
}
