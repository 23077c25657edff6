use clap::Parser;
use fibtrie::RouteTable;
use ipnet::Ipv4Net;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fibtrie-benchmark")]
#[command(about = "Benchmark fibtrie insert/lookup performance")]
struct Args {
    /// Number of random networks to insert
    #[arg(short, long, default_value = "100000")]
    size: usize,

    /// Number of random address lookups to perform
    #[arg(short, long, default_value = "1000000")]
    lookups: usize,

    /// Print the trie's structural report after the run
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize, Deserialize)]
struct InsertBenchmarkResult {
    networks_inserted: usize,
    insert_time_ms: f64,
    inserts_per_second: f64,
}

#[derive(Serialize, Deserialize)]
struct LookupBenchmarkResult {
    networks_in_table: usize,
    lookups_performed: usize,
    lookup_time_ms: f64,
    lookups_per_second: f64,
    hit_rate: f64,
}

#[derive(Serialize, Deserialize)]
struct BenchmarkReport {
    insert: InsertBenchmarkResult,
    lookup: LookupBenchmarkResult,
}

fn generate_networks(size: usize) -> Vec<Ipv4Net> {
    let mut rng = thread_rng();
    let mut networks = Vec::with_capacity(size);

    for _ in 0..size {
        let prefix = rng.gen_range(1..=32);
        let addr = Ipv4Addr::from(rng.gen::<u32>());
        // normalize to the network address
        networks.push(Ipv4Net::new(addr, prefix).unwrap().trunc());
    }

    networks
}

fn main() {
    let args = Args::parse();

    let networks = generate_networks(args.size);

    let mut table: RouteTable<u32> = RouteTable::new();
    let start = Instant::now();
    for (i, network) in networks.iter().enumerate() {
        if let Err(err) = table.insert(*network, i as u32) {
            eprintln!("insert {network} failed: {err}");
            std::process::exit(1);
        }
    }
    let insert_time = start.elapsed();
    let insert_ms = insert_time.as_secs_f64() * 1000.0;

    let insert = InsertBenchmarkResult {
        networks_inserted: networks.len(),
        insert_time_ms: insert_ms,
        inserts_per_second: networks.len() as f64 / insert_time.as_secs_f64(),
    };

    let mut rng = thread_rng();
    let probes: Vec<Ipv4Addr> = (0..args.lookups)
        .map(|_| Ipv4Addr::from(rng.gen::<u32>()))
        .collect();

    let mut hits = 0usize;
    let start = Instant::now();
    for addr in &probes {
        if table.lookup(*addr).is_some() {
            hits += 1;
        }
    }
    let lookup_time = start.elapsed();
    let lookup_ms = lookup_time.as_secs_f64() * 1000.0;

    let lookup = LookupBenchmarkResult {
        networks_in_table: table.len(),
        lookups_performed: probes.len(),
        lookup_time_ms: lookup_ms,
        lookups_per_second: probes.len() as f64 / lookup_time.as_secs_f64(),
        hit_rate: hits as f64 / probes.len() as f64,
    };

    let report = BenchmarkReport { insert, lookup };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize report: {err}"),
    }

    if args.stats {
        eprintln!("{}", table.stats());
    }
}
