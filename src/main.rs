use app::{
    AppHelper, AuthorsCommand, Command, CompareCommand, DecideCommand, ExportCommand,
    ProblemsCommand, SimulateCommand, SolveCommand,
};

mod app;

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Transarg, an argumentation-based travel mode chooser.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CompareCommand::new()),
        Box::new(DecideCommand::new()),
        Box::new(ExportCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SimulateCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
