/// full calculator - PITI + HOA breakdown, optionally seeded from a json config
///
/// cargo run --example 01_full_calculator -- calculator.json
use mortgage_estimate_rs::{CalculatorConfig, EstimateInputs, EstimateView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mortgage_estimate_rs=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };

    let inputs = config.full_inputs();
    println!("=== default scenario ===\n");
    println!("{}\n", EstimateView::for_inputs(&inputs).render());

    // a condo with dues and a bigger down payment
    let condo = EstimateInputs {
        home_price: 320_000.0,
        down_payment_percent: 20.0,
        monthly_hoa: 350.0,
        ..inputs
    };
    let view = EstimateView::for_inputs(&condo);
    println!("=== condo, 20% down, $350 HOA ===\n");
    println!("{}\n", view.render());
    println!("{}", view.json());

    Ok(())
}
