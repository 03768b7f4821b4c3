extern crate clap;
extern crate heapsort;
extern crate rand;

use rand::Rng;

fn main() {
    let matches = clap::App::new("heapsort-demo")
        .arg(clap::Arg::with_name("count")
            .index(1)
            .value_name("COUNT")
            .required(false)
            .help("Amount of random values to generate (default 50)"))
        .arg(clap::Arg::with_name("trace")
            .long("trace")
            .required(false)
            .takes_value(false)
            .help("Prints every swap done by heap repair"))
        .get_matches();
    let count = match matches.value_of("count") {
        Some(s) => s.parse::<u32>().expect("Count wasn't a number"),
        None => 50,
    };
    let trace = matches.is_present("trace");

    let mut rng = rand::thread_rng();
    let mut values = (0..count)
        .map(|_| rng.gen_range(0..=count))
        .collect::<Vec<u32>>();

    println!("Before:");
    print_values(&values);
    if trace {
        heapsort::sort_by_with_observer(&mut values, u32::cmp, |a, b| {
            println!("Swapping {} and {}", a, b);
        });
    } else {
        heapsort::sort(&mut values);
    }
    println!("After:");
    print_values(&values);
}

// Ten values per line.
fn print_values(values: &[u32]) {
    for chunk in values.chunks(10) {
        let line = chunk.iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", line);
    }
}
