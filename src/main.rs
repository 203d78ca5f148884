//! lobcore - Demo Binary
//!
//! Walks a small book session and prints the resulting market state.

use lobcore::types::price::{from_fixed_trimmed, to_fixed};
use lobcore::{BatchPolicy, OrderBook, OrderRequest, Side};

fn main() {
    println!("===========================================");
    println!("  lobcore - limit order book engine");
    println!("===========================================");
    println!();

    let mut book = OrderBook::with_capacity(1024);
    let p = |s: &str| to_fixed(s).expect("valid fixed-point literal");

    println!("Inserting resting orders...");
    let requests = [
        OrderRequest::new(1, Side::Buy, p("100"), p("10")),
        OrderRequest::new(2, Side::Buy, p("99.5"), p("4")),
        OrderRequest::new(3, Side::Buy, p("100"), p("2.5")),
        OrderRequest::new(4, Side::Sell, p("101"), p("7")),
        OrderRequest::new(5, Side::Sell, p("102.25"), p("12")),
    ];
    match book.batch_add(&requests, BatchPolicy::FailSoft) {
        Ok(report) => println!("  accepted: {}", report.accepted),
        Err(e) => println!("  batch failed: {}", e),
    }
    println!();

    println!("Amending order 3 and cancelling order 4...");
    if let Err(e) = book.modify_order(3, p("5")) {
        println!("  amend failed: {}", e);
    }
    if let Err(e) = book.delete_order(4) {
        println!("  cancel failed: {}", e);
    }
    println!();

    println!("Market state:");
    match book.best_bid() {
        Some(price) => println!("  best bid: {}", from_fixed_trimmed(price)),
        None => println!("  best bid: (none)"),
    }
    match book.best_ask() {
        Some(price) => println!("  best ask: {}", from_fixed_trimmed(price)),
        None => println!("  best ask: (none)"),
    }
    println!();

    println!("Depth (top 5):");
    match book.depth(5) {
        Ok(depth) => {
            for (price, volume) in &depth.bids {
                println!(
                    "  bid {:>10} x {}",
                    from_fixed_trimmed(*price),
                    from_fixed_trimmed(*volume)
                );
            }
            for (price, volume) in &depth.asks {
                println!(
                    "  ask {:>10} x {}",
                    from_fixed_trimmed(*price),
                    from_fixed_trimmed(*volume)
                );
            }
        }
        Err(e) => println!("  depth failed: {}", e),
    }
    println!();

    let snapshot = book.snapshot();
    println!(
        "Snapshot: {} resting orders, digest {}",
        snapshot.orders.len(),
        snapshot.digest_hex()
    );
}
