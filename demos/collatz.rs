//! Collatz Trajectory
//!
//! This demo builds a program that walks the Collatz sequence and resolves it
//! against a fresh store.
//!
//! Key concepts:
//! - Variables declared with `names!`
//! - An `if_else` branch whose untaken arm is never evaluated
//! - A do-while loop that tests its flag after every pass
//! - Reading the full write history back out of the store
//!
//! Run with: cargo run --example collatz -- 27

use typevar::builder::{BlockBuilder, LoopBuilder};
use typevar::control::Assignment;
use typevar::core::{Epoch, Value};
use typevar::names;
use typevar::resolver::{Expr, ResolveError, Resolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let start: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 7,
    };

    names!(value, steps, more);

    let body = BlockBuilder::new()
        .if_else(
            Expr::eq(Expr::remainder(&value, 2u64), 0u64),
            Assignment::new(&value),
            Expr::divide(&value, 2u64),
            Expr::succ(Expr::mult(&value, 3u64)),
        )
        .assign(&steps, Expr::add(&steps, 1u64))
        .assign(&more, Expr::not(Expr::eq(&value, 1u64)))
        .build()?;

    let program = BlockBuilder::new()
        .assign(&value, start)
        .assign(&steps, 0u64)
        .do_while(LoopBuilder::new().body(body).until_false(&more))?
        .build()?;

    let mut rt = Resolver::new();
    let epoch = Epoch::fresh();
    match program.run(&mut rt, epoch) {
        Ok(_) => {}
        Err(ResolveError::DepthLimitExceeded { limit }) => {
            println!("Gave up after reaching depth {limit}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let trajectory: Vec<String> = rt
        .store()
        .history(&value, epoch)
        .into_iter()
        .map(Value::to_string)
        .collect();

    println!("Start: {start}");
    println!("Steps: {}", rt.value(&steps, epoch));
    println!("Trajectory: {}", trajectory.join(" -> "));
    println!("Writes recorded: {}", rt.store().len());

    Ok(())
}
