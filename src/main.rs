use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::palette::{parse_rows, PALETTE_TSV};
use crate::utils::get_pb;

mod macros;
mod palette;
mod utils;

fn main() {
    let rows = time_it! { "parsing palette table" =>
        parse_rows(PALETTE_TSV).expect("embedded palette table is malformed")
    };

    let row_count = rows.len() as u64;
    let lines = time_it! {at once | "normalizing" =>
        rows.into_par_iter()
            .progress_with(get_pb(row_count, "normalizing"))
            .map(|row| row.normalized().to_vec3())
            .collect::<Vec<_>>()
    };

    for line in &lines {
        println!("{line}");
    }
}
