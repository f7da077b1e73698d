/// quick estimate - payment for a loan amount, rate and term
use mortgage_estimate_rs::{monthly_payment, LoanParameters, QuickEstimateView};

fn main() {
    // $400,000 at 6.5% over 30 years
    let params = LoanParameters::default();
    let view = QuickEstimateView::for_params(&params);
    println!("{}", view.summary());

    // the same engine as a bare function
    let payment = monthly_payment(250_000.0, 7.0, 15.0);
    println!("15-year at 7% on $250,000: {:.2}", payment);

    println!("{}", view.json());
}
