use ipv6_subnet_match::output::print_match_report;
use ipv6_subnet_match::{check_for_duplicate_rules, get_watch_rules};
use std::error::Error;
use std::net::Ipv6Addr;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let watch = get_watch_rules(None).expect("Error reading watch file");
    check_for_duplicate_rules(&watch).expect("Error validating rules");

    let addrs = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<Ipv6Addr>()
                .map_err(|e| format!("Invalid address '{arg}': {e}"))
        })
        .collect::<Result<Vec<Ipv6Addr>, String>>()?;

    print_match_report(&watch.proxies, &addrs);

    Ok(())
}
