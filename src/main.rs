use std::env;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};

use npuzzle_solver::config::{Format, Heuristic, Limits};
use npuzzle_solver::puzzle::Puzzle;
use npuzzle_solver::solver::SolverOk;
use npuzzle_solver::state::State;
use npuzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let app = App::new("npuzzle-solver")
        .author("Martin Taibr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sliding tile puzzles (2x2 to 4x4) using A*")
        .arg(
            Arg::with_name("tiles")
                .short("t")
                .long("tiles")
                .help("use the tiles-out-of-place heuristic"),
        )
        .arg(
            Arg::with_name("manhattan")
                .short("m")
                .long("manhattan")
                .help("use the manhattan distance heuristic (default)"),
        )
        .group(ArgGroup::with_name("heuristic").args(&["tiles", "manhattan"]))
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print states on one line"),
        )
        .arg(
            Arg::with_name("tree")
                .long("tree")
                .help("print the whole search tree"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print progress whenever a new depth is expanded"),
        )
        .arg(
            Arg::with_name("max-iterations")
                .long("max-iterations")
                .takes_value(true)
                .value_name("N")
                .help("stop after expanding N nodes"),
        )
        .arg(
            Arg::with_name("max-nodes")
                .long("max-nodes")
                .takes_value(true)
                .value_name("N")
                .help("stop before the search tree grows past N nodes"),
        )
        .arg(
            Arg::with_name("open-capacity")
                .long("open-capacity")
                .takes_value(true)
                .value_name("N")
                .help("keep at most N nodes queued for expansion"),
        )
        .arg(
            Arg::with_name("unbounded")
                .long("unbounded")
                .conflicts_with_all(&["max-iterations", "max-nodes", "open-capacity"])
                .help("don't limit the search at all"),
        )
        .arg(
            Arg::with_name("preset")
                .long("preset")
                .takes_value(true)
                .possible_values(&["solved", "challenging"])
                .help("solve a built-in puzzle instead of a file"),
        )
        .arg(Arg::with_name("file").help("puzzle file - initial grid and optionally goal grid"))
        .group(
            ArgGroup::with_name("input")
                .args(&["preset", "file"])
                .required(true),
        );

    #[cfg(feature = "graph")]
    let app = app.arg(
        Arg::with_name("graph")
            .long("graph")
            .takes_value(true)
            .value_name("FILE")
            .help("write the search tree as a DOT graph"),
    );

    let matches = app.get_matches();

    let heuristic = if matches.is_present("tiles") {
        Heuristic::TilesOutOfPlace
    } else {
        Heuristic::ManhattanDistance
    };
    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Grid
    };
    let limits = parse_limits(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    let (source, puzzle) = load_puzzle(&matches);

    println!("Solving {}...", source);
    print_state("Initial state:", &puzzle.initial, format);
    print_state("Goal state:", &puzzle.goal, format);
    println!();

    let solver_ok = puzzle
        .solve(heuristic, limits, matches.is_present("status"))
        .unwrap_or_else(|err| {
            eprintln!("Failed to solve: {}", err);
            process::exit(1);
        });

    println!("{}", solver_ok);
    println!("{}", solver_ok.stats);
    if let Some(solution) = solver_ok.format_solution(format) {
        println!("Solution path:");
        println!("{}", solution);
    }
    if matches.is_present("tree") {
        println!("Search tree:");
        print!("{}", solver_ok.format_tree());
    }

    write_graph(&matches, &solver_ok);
}

#[cfg(feature = "graph")]
fn write_graph(matches: &ArgMatches<'_>, solver_ok: &SolverOk) {
    if let Some(path) = matches.value_of("graph") {
        let written =
            std::fs::File::create(path).and_then(|mut file| solver_ok.write_graph(&mut file));
        if let Err(err) = written {
            eprintln!("Can't write graph to {}: {}", path, err);
            process::exit(1);
        }
    }
}

#[cfg(not(feature = "graph"))]
fn write_graph(_matches: &ArgMatches<'_>, _solver_ok: &SolverOk) {}

fn parse_limits(matches: &ArgMatches<'_>) -> Result<Limits, String> {
    if matches.is_present("unbounded") {
        return Ok(Limits::unbounded());
    }

    let mut limits = Limits::default();
    if let Some(max) = parse_number(matches, "max-iterations")? {
        limits = limits.with_max_iterations(max);
    }
    if let Some(max) = parse_number(matches, "max-nodes")? {
        limits = limits.with_max_nodes(max);
    }
    if let Some(capacity) = parse_number(matches, "open-capacity")? {
        limits = limits.with_open_capacity(capacity);
    }
    Ok(limits)
}

fn parse_number<T: std::str::FromStr>(
    matches: &ArgMatches<'_>,
    name: &str,
) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid value for --{}: {}", name, value)),
    }
}

fn load_puzzle(matches: &ArgMatches<'_>) -> (String, Puzzle) {
    if let Some(name) = matches.value_of("preset") {
        // clap checks possible values
        let puzzle = Puzzle::preset(name).unwrap_or_else(|| {
            eprintln!("Unknown preset {}", name);
            process::exit(1);
        });
        return (format!("preset {}", name), puzzle);
    }

    // the input group is required so there's a file if there's no preset
    let path = matches.value_of("file").unwrap_or_default();
    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load puzzle {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load puzzle {}: {}", path, err),
        }
        process::exit(1);
    });
    (path.to_string(), puzzle)
}

fn print_state(label: &str, state: &State, format: Format) {
    println!("{}", label);
    match format {
        Format::Grid => print!("{}", state.format(format)),
        Format::Compact => println!("{}", state.format(format)),
    }
}
