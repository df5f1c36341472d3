use std::io::{self, BufRead, Lines, StdinLock};
use std::thread;

use clap::Parser;
use crossbeam_channel::unbounded;
use env_logger::Env;
use log::{debug, error};

use sweep_elevator::modules::command::{self, Command, HELP_TEXT};
use sweep_elevator::modules::display;
use sweep_elevator::modules::elevator::Elevator;
use sweep_elevator::utilities::config::{Args, Config, MAX_FLOORS, MIN_FLOORS};
use sweep_elevator::utilities::debug::Debug;
use sweep_elevator::utilities::error::InputError;

type Input<'a> = Lines<StdinLock<'a>>;

/// Asks until `parse` accepts a line. `None` when input ends.
fn prompt<T>(
    input: &mut Input,
    message: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> io::Result<Option<T>> {
    println!("{}", message);
    for line in input.by_ref() {
        match parse(&line?) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{}", e),
        }
    }
    Ok(None)
}

/// Uses a preset value when it validates, otherwise asks for one.
fn preset_or_prompt<T>(
    input: &mut Input,
    preset: Option<T>,
    message: &str,
    validate: impl Fn(T) -> Result<T, InputError>,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> io::Result<Option<T>> {
    if let Some(value) = preset {
        match validate(value) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{}", e),
        }
    }
    prompt(input, message, parse)
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match Config::get(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidData, e));
        }
    };
    debug!("{:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    // READ BUILDING LAYOUT
    let num_floors = match preset_or_prompt(
        &mut input,
        config.elevator.num_floors,
        &format!("Enter number of floors ({}-{}):", MIN_FLOORS, MAX_FLOORS),
        command::validate_floor_count,
        command::parse_floor_count,
    )? {
        Some(num_floors) => num_floors,
        None => return Ok(()),
    };
    let starting_floor = match preset_or_prompt(
        &mut input,
        config.elevator.starting_floor,
        &format!("Enter starting floor (1-{}):", num_floors),
        |floor| command::validate_starting_floor(floor, num_floors),
        |line| command::parse_starting_floor(line, num_floors),
    )? {
        Some(floor) => floor,
        None => return Ok(()),
    };

    // INITIALIZE ELEVATOR AND EVENT PRINTER
    let (events_tx, events_rx) = unbounded();
    let display_handle = thread::Builder::new()
        .name("display".to_string())
        .spawn(move || display::main(events_rx))?;
    let elevator = Elevator::new(num_floors, starting_floor, config.tick_interval, events_tx);

    println!("{}", HELP_TEXT);

    // COMMAND LOOP
    for line in input {
        match command::parse(&line?, elevator.num_floors()) {
            Ok(Command::Pause) => {
                println!("Paused - Enter more commands:");
                elevator.pause();
            }
            Ok(Command::Start) => {
                if !elevator.is_running() {
                    println!("Elevator: Starting");
                }
                elevator.start()?;
            }
            Ok(Command::Exit) => break,
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Status) => {
                let status = elevator.status();
                debug!("status: {}", serde_json::to_string(&status).unwrap_or_default());
                Debug::new().printstatus(&status)?;
            }
            Ok(Command::Floor(request)) => elevator.add_request(request),
            Err(e) => println!("{}", e),
        }
    }

    if elevator.is_running() {
        println!("Elevator: shutting down");
    }
    elevator.shutdown();
    // last sender goes with the elevator, which ends the display thread
    drop(elevator);
    if display_handle.join().is_err() {
        error!("display thread panicked");
    }
    println!("Goodbye");
    Ok(())
}
