use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use snake_arcade::audio::{NullSink, SoundSink, TerminalBell};
use snake_arcade::game::{Difficulty, GameConfig};
use snake_arcade::modes::PlayMode;
use snake_arcade::score::SaveFile;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Terminal Snake with a hard mode where the food runs away")]
struct Cli {
    /// Difficulty to start with
    #[arg(long, default_value = "normal")]
    difficulty: DifficultyArg,

    /// Where the high score and sound preference are kept
    #[arg(long, default_value = "snake_save.json")]
    save_file: PathBuf,

    /// Disable sound entirely, ignoring the saved preference
    #[arg(long)]
    no_sound: bool,
}

#[derive(Clone, ValueEnum)]
enum DifficultyArg {
    /// Food stays where it spawns
    Normal,
    /// Food wanders the grid on its own timer
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let save = SaveFile::load(&cli.save_file);
    let sound: Box<dyn SoundSink> = if cli.no_sound {
        Box::new(NullSink)
    } else {
        Box::new(TerminalBell)
    };

    let mut play_mode = PlayMode::new(
        GameConfig::default(),
        cli.difficulty.into(),
        save,
        sound,
    );
    play_mode.run().await?;

    Ok(())
}
