// Timings go to stderr; stdout carries nothing but the converted
// palette lines.
#[macro_export]
macro_rules! time_it {
    (at once | $comment:expr => $stmt:stmt) => {{
        let start = std::time::Instant::now();
        let result = { $stmt };
        let duration = start.elapsed();
        eprintln!("{} => {:?}", $comment, duration);
        result
    }};
    ($comment:expr => $stmt:stmt) => {{
        #[allow(unused_imports)]
        use std::io::Write as _;
        eprint!("{}", $comment);
        let _ = std::io::stderr().flush();
        let start = std::time::Instant::now();
        let result = { $stmt };
        let duration = start.elapsed();
        eprintln!(" => {:?}", duration);
        result
    }};
}

#[macro_export]
macro_rules! remap {
    (value: $value: expr, from: $min1: expr, $max1: expr, to: $min2: expr, $max2: expr) => {{
        let value = $value;
        let min1 = $min1;
        let max1 = $max1;
        let min2 = $min2;
        let max2 = $max2;

        min2 + (value - min1) * (max2 - min2) / (max1 - min1)
    }};
}
