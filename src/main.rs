use std::env;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    jwt::run(&mut io::stdout(), &args)
}
