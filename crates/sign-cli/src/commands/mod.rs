//! Command handlers. Each receives the resolved [`App`] explicitly.

mod features;
mod signs;
mod similarity;

use sign_core::SignError;

use crate::app::App;
use crate::Commands;

pub fn dispatch(app: &App, command: Commands) -> Result<(), SignError> {
    match command {
        Commands::List => signs::list(app),
        Commands::New { name } => signs::new(app, &name),
        Commands::Show { name } => signs::show(app, &name),
        Commands::Add { sign, input } => features::add(app, &sign, &input),
        Commands::Remove { sign, feature } => features::remove(app, &sign, &feature),
        Commands::Compare { left, right } => similarity::compare(app, &left, &right),
        Commands::Rank { name } => similarity::rank(app, &name),
    }
}
