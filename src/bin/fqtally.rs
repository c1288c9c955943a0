use std::env;
use std::process;

use fqtally::tally_file;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: fqtally <reads.fastq[.gz|.bz2|.xz]>");
        process::exit(2);
    }

    match tally_file(&args[1]) {
        Ok(summary) => {
            println!("Number of unique sequences: {}", summary.unique_sequences);
        }
        Err(e) => {
            eprintln!("fqtally: {}", e);
            process::exit(1);
        }
    }
}
