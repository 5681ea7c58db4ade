use env_logger::Env;
use log::info;

use transit_station::config::DemoConfig;
use transit_station::fixture::Fixture;
use transit_station::report::{PassengerSummary, StationSchedules, TravelTime, VehicleSummary};
use transit_station::{Direction, FixtureError, ModelError, Network, Schedule};

fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

fn main() -> Result<(), FixtureError> {
    init_logger();
    let config = DemoConfig::default();

    println!("=== Public Transportation Station Management System (Demo) ===\n");

    info!("Creating network");
    let mut network = Network::try_from(Fixture::load()?)?;

    for station in network.stations() {
        println!("{}", StationSchedules(station));
    }
    for vehicle in network.vehicles() {
        println!("{}", VehicleSummary(vehicle));
    }

    let express_id = config.express_vehicle_id;
    println!(
        "\nAttempting booking passenger {} on vehicle {} (ExpressBus)...",
        config.passenger_id, express_id
    );
    match network.book(config.passenger_id, express_id) {
        Ok(()) => println!("Booking successful."),
        Err(err) => println!("Booking failed: {err}"),
    }

    println!("\nPassenger & Vehicle state after booking:");
    print_passenger_and_vehicle(&network, &config)?;

    println!("\nFilling up ExpressBus (simulate)...");
    let express = network
        .vehicle_mut(express_id)
        .ok_or(ModelError::UnknownVehicle(express_id))?;
    let filled = (0..config.fill_attempts)
        .filter(|_| express.book_seat())
        .count();
    println!(
        "After mass booking attempts ({} of {} succeeded):",
        filled, config.fill_attempts
    );
    println!("{}", VehicleSummary(&*express));

    println!();
    for vehicle_id in [config.standard_vehicle_id, express_id] {
        let vehicle = network
            .vehicle(vehicle_id)
            .ok_or(ModelError::UnknownVehicle(vehicle_id))?;
        let line = TravelTime {
            vehicle,
            distance_km: config.distance_km,
        };
        println!("{line}");
    }

    println!(
        "\nCanceling one booking on express bus for passenger {}...",
        config.passenger_id
    );
    match network.cancel(config.passenger_id, express_id) {
        Ok(()) => println!("Cancellation successful."),
        Err(err @ ModelError::BookingNotFound { .. }) => {
            println!("Passenger had no booking for that vehicle: {err}")
        }
        Err(err) => println!("Vehicle cancel failed: {err}"),
    }
    print_passenger_and_vehicle(&network, &config)?;

    println!("\nTesting station schedule limit...");
    let station = network
        .station_mut(config.limit_station_id)
        .ok_or(ModelError::UnknownStation(config.limit_station_id))?;
    for time in config.extra_schedule_times() {
        let schedule = Schedule::new(
            time.as_str(),
            Direction::Arrival,
            config.standard_vehicle_id,
        );
        if !station.add_schedule(schedule) {
            println!("Failed to add schedule at {time}");
        }
    }

    println!("\nFinal schedules:");
    println!("{}", StationSchedules(&*station));

    println!("=== Demo finished ===");
    Ok(())
}

fn print_passenger_and_vehicle(network: &Network, config: &DemoConfig) -> Result<(), ModelError> {
    let passenger = network
        .passenger(config.passenger_id)
        .ok_or(ModelError::UnknownPassenger(config.passenger_id))?;
    let vehicle = network
        .vehicle(config.express_vehicle_id)
        .ok_or(ModelError::UnknownVehicle(config.express_vehicle_id))?;
    println!("{}", PassengerSummary(passenger));
    println!("{}", VehicleSummary(vehicle));
    Ok(())
}
