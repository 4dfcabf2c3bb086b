use indicatif::{ProgressBar, ProgressStyle};

pub fn get_pb(len: u64, msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg}: {wide_bar} {pos}/{len} ({elapsed})")
            .expect("static progress bar template"),
    );
    pb.set_message(msg);

    pb
}
