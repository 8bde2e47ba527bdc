use std::error::Error;
use std::process;

use log::{error, info};

use digcircuit::common::init_logging;
use digcircuit::config::DigcircuitConfig;
use digcircuit::{BinaryInputs, Circuit, LogicGate, LogicLevel, TruthTable, XnorGate, XorGate};

fn main() {
    let config = match DigcircuitConfig::new() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Failed to set up logging: {}", err);
        process::exit(1);
    }

    info!("Using config: {:?}", config);
    info!("Starting digcircuit in '{}' mode", config.mode);

    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(config: &DigcircuitConfig) -> Result<(), Box<dyn Error>> {
    if config.runs_truth_tables() {
        print_truth_tables(config)?;
    }
    if config.runs_scenario() {
        run_scenario(config)?;
    }
    Ok(())
}

fn new_circuit(config: &DigcircuitConfig) -> Circuit {
    let mut circuit = Circuit::new();
    circuit.set_cycle_detection(config.circuit.detect_cycles());
    circuit
}

fn print_truth_tables(config: &DigcircuitConfig) -> Result<(), Box<dyn Error>> {
    let mut circuit = new_circuit(config);

    let not = circuit.not_gate("not");
    for level in [LogicLevel::Low, LogicLevel::High] {
        not.set_level(&mut circuit, level);
        info!("not {} -> {}", level, not.output(&mut circuit));
    }

    let and = circuit.and_gate("and");
    let or = circuit.or_gate("or");
    let xor = XorGate::new(&mut circuit, "xor")?;
    let xnor = XnorGate::new(&mut circuit, "xnor")?;

    let gates: [&dyn BinaryInputs; 4] = [&and, &or, &xor, &xnor];
    for gate in gates {
        info!("\n{}", TruthTable::of(gate, &mut circuit));
    }

    Ok(())
}

fn run_scenario(config: &DigcircuitConfig) -> Result<(), Box<dyn Error>> {
    let mut circuit = new_circuit(config);

    let and_1 = circuit.and_gate("and1");
    let and_2 = circuit.and_gate("and2");
    let or = circuit.or_gate("or1");
    let not = circuit.not_gate("not1");
    circuit.connect(&and_1, or)?;
    circuit.connect(&and_2, or)?;
    circuit.connect(&or, not)?;

    if let Some(cycle) = circuit.find_cycle() {
        let labels: Vec<&str> = cycle.iter().map(|id| circuit.label(*id)).collect();
        return Err(format!("Scenario circuit has a loop through {:?}", labels).into());
    }

    for (index, step) in config.scenario.steps.iter().enumerate() {
        let levels = step.levels()?;
        and_1.set_levels(&mut circuit, Some(levels.and_1[0]), Some(levels.and_1[1]));
        and_2.set_levels(&mut circuit, Some(levels.and_2[0]), Some(levels.and_2[1]));

        let output = not.output(&mut circuit);
        info!(
            "Step {}: and1({}, {}) and2({}, {}) -> {} = {}",
            index + 1,
            levels.and_1[0],
            levels.and_1[1],
            levels.and_2[0],
            levels.and_2[1],
            not.label(&circuit),
            output
        );
    }

    Ok(())
}
