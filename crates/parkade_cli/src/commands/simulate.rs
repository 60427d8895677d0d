//! Simulate command implementation.

use parkade_core::{
    Clock, Config, FeePolicy, IdAllocator, LotError, ManualClock, Occupancy, ParkingLot,
    ParkingTicket, Receipt, Timestamp, Vehicle,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Longest stay the command accepts, in hours (a little over a century).
pub const MAX_HOURS: u32 = 1_000_000;

/// A parsed simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Lot location.
    pub location: String,
    /// Explicit fee policy, if any.
    pub policy: Option<FeePolicy>,
    /// Spot batches in the order they are added.
    pub spots: Vec<(String, usize)>,
    /// Vehicles in arrival order.
    pub vehicles: Vec<Vehicle>,
    /// Hours every vehicle stays.
    pub hours: u32,
}

impl Plan {
    /// Parses `TYPE=COUNT` spot batches and `TYPE:PLATE` vehicles.
    pub fn parse(
        location: &str,
        policy: Option<&str>,
        spots: &[String],
        park: &[String],
        hours: u32,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let policy = policy.map(str::parse::<FeePolicy>).transpose()?;

        let spots = spots
            .iter()
            .map(|batch| {
                let (spot_type, count) = batch
                    .split_once('=')
                    .ok_or_else(|| format!("spot batch must be TYPE=COUNT: {batch}"))?;
                let count: usize = count
                    .parse()
                    .map_err(|_| format!("invalid spot count in {batch}"))?;
                Ok((spot_type.to_string(), count))
            })
            .collect::<Result<Vec<_>, String>>()?;

        let vehicles = park
            .iter()
            .map(|entry| {
                let (vehicle_type, plate) = entry
                    .split_once(':')
                    .ok_or_else(|| format!("vehicle must be TYPE:PLATE: {entry}"))?;
                Ok(Vehicle::new(plate, vehicle_type))
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            location: location.to_string(),
            policy,
            spots,
            vehicles,
            hours,
        })
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Lot location.
    pub location: String,
    /// Policy the lot billed under.
    pub policy: FeePolicy,
    /// Tickets, in issue order.
    pub tickets: Vec<ParkingTicket>,
    /// Plates turned away for lack of space.
    pub rejected: Vec<String>,
    /// Receipts, in issue order.
    pub receipts: Vec<Receipt>,
    /// Final state of the lot.
    pub occupancy: Occupancy,
}

/// Runs the simulate command.
pub fn run(plan: &Plan, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start = Timestamp::now();
    let report = simulate(plan, start)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => print_text_output(&report),
    }

    Ok(())
}

fn simulate(plan: &Plan, start: Timestamp) -> Result<SimulationReport, LotError> {
    let clock = Arc::new(ManualClock::new(start));
    let mut config = Config::new();
    if let Some(policy) = plan.policy {
        config = config.fee_policy(policy);
    }
    let mut lot = ParkingLot::with_parts(
        plan.location.as_str(),
        config,
        Arc::new(IdAllocator::new()),
        Arc::clone(&clock) as Arc<dyn Clock>,
    );

    for (spot_type, count) in &plan.spots {
        lot.add_spots(spot_type.as_str(), *count)?;
    }

    let mut tickets = Vec::new();
    let mut rejected = Vec::new();
    for vehicle in &plan.vehicles {
        match lot.park_vehicle(vehicle.clone()) {
            Ok(ticket) => tickets.push(ticket),
            Err(err) if err.is_capacity() => {
                warn!(plate = vehicle.license_plate(), "turned away");
                rejected.push(vehicle.license_plate().to_string());
            }
            Err(err) => return Err(err),
        }
    }

    let now = clock.advance_hours(i64::from(plan.hours))?;
    info!(hours = plan.hours, %now, "clock advanced");

    let receipts = tickets
        .iter()
        .map(|ticket| lot.unpark_vehicle(ticket.ticket_id()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SimulationReport {
        location: lot.location().to_string(),
        policy: lot.fee_policy(),
        tickets,
        rejected,
        receipts,
        occupancy: lot.occupancy(),
    })
}

fn print_text_output(report: &SimulationReport) {
    println!("Parkade Simulation: {} ({} policy)", report.location, report.policy);
    println!("==================");
    println!();

    for ticket in &report.tickets {
        println!("{ticket}");
    }
    for plate in &report.rejected {
        println!("No available spots for {plate}");
    }
    if !report.rejected.is_empty() {
        println!();
    }
    for receipt in &report.receipts {
        println!("{receipt}");
        println!();
    }

    let occupancy = &report.occupancy;
    println!("Summary:");
    println!("  Spots:    {} total, {} free", occupancy.total, occupancy.free);
    println!("  Receipts: {}", occupancy.receipts_issued);
    println!("  Revenue:  {}", occupancy.revenue);
}
