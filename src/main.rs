use std::env;

use anyhow::{Context, Result};
use log::info;

use nes_cpu::mappers;
use nes_cpu::metrics::Collector;
use nes_cpu::settings::RunSettings;
use nes_cpu::{Bus, Cartridge, Cpu};

fn main() -> Result<()> {
    env_logger::init();

    let settings = RunSettings::from_args(env::args().skip(1))?;

    let cartridge = Cartridge::new(&settings.rom_path)
        .with_context(|| format!("Can't load cartridge {}", settings.rom_path.display()))?;
    info!(
        "Loaded '{cartridge}' (mapper {}, {:?} mirroring)",
        cartridge.mapper_number(),
        cartridge.mirroring()
    );

    let mapper = mappers::mapper_for(&cartridge).context("Can't insert cartridge")?;
    let mut cpu = Cpu::new(Bus::new(mapper));

    let mut metrics = Collector::new();
    let mut executed: usize = 0;
    let mut faults: usize = 0;

    while settings.steps.map_or(true, |steps| executed < steps) {
        // faults are logged by the CPU, execution goes on
        let faulted = cpu.step().is_err();
        if faulted {
            faults += 1;
        }
        metrics.observe_step(faulted);
        executed += 1;

        if executed % settings.metrics_interval == 0 {
            let metrics = metrics.collect();
            info!(
                "{} instructions ({} faults) in {:?}, {} instructions/s",
                metrics.instructions_executed,
                metrics.faults,
                metrics.recorded_time,
                metrics.instructions_per_second
            );
        }
    }

    info!("Executed {executed} instructions with {faults} faults");
    println!("{}", cpu.registers());

    if let Some((start, end)) = settings.dump_range {
        print!("{}", cpu.bus().dump(start, end));
    }

    Ok(())
}
