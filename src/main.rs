use std::{cell::Cell, env, process, ptr, rc::Rc, sync::Arc};

use dbc::{
    WEAK_CONTRACTS, ensures, ensures_equal, ensures_non_null, fail, invariant, invariant_equal,
    invariant_non_null, requires, requires_equal, requires_non_null, weak_requires,
};

const USAGE_EXIT_CODE: i32 = 2;

static SLOT: i32 = 17;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        process::exit(USAGE_EXIT_CODE);
    }

    let arg = args.get(2).map(String::as_str).unwrap_or("");
    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "area" => println!("area={}", compute_area(parse_int(arg))),
        "slot" => println!("slot={}", read_slot(arg == "some")),
        "attach" => println!("attached={}", attach(arg == "same")),
        "halve" => println!("half={}", halve(parse_int(arg))),
        "find-user" => println!("user={}", find_user(arg)),
        "intern" => println!("interned={}", intern(arg == "cached")),
        "drain" => println!("drained={}", drain(parse_int(arg))),
        "cursor" => println!("cursor={}", cursor(arg == "some")),
        "anchor" => println!("anchor={}", anchor(arg == "same")),
        "dispatch" => println!("dispatch={}", dispatch(parse_int(arg))),
        "weak" => println!("evaluated={} weak={}", weak(parse_int(arg)), WEAK_CONTRACTS),
        other => {
            eprintln!("Error: unknown scenario: {other}");
            print_help();
            process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn parse_int(arg: &str) -> i64 {
    match arg.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: expected an integer, got `{arg}`");
            process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn compute_area(x: i64) -> i64 {
    requires!(x > 0);
    x * x
}

fn read_slot(present: bool) -> i32 {
    let ptr: *const i32 = if present { &SLOT } else { ptr::null() };
    let ptr = requires_non_null!(ptr);
    // SAFETY: non-null pointers here always point at `SLOT`.
    unsafe { *ptr }
}

fn attach(same: bool) -> usize {
    let handle_a = Rc::new(vec![1, 2, 3]);
    let handle_b = if same {
        Rc::clone(&handle_a)
    } else {
        Rc::new(vec![1, 2, 3])
    };
    let handle = requires_equal!(handle_a, handle_b);
    handle.len()
}

fn halve(n: i64) -> i64 {
    let half = n / 2;
    ensures!(half * 2 == n);
    half
}

fn find_user(name: &str) -> &'static str {
    let found = ["ada", "grace"].into_iter().find(|user| *user == name);
    match ensures_non_null!(found) {
        Some(user) => user,
        None => fail!(),
    }
}

fn intern(cached: bool) -> usize {
    let cache = Arc::new(String::from("symbol"));
    let interned = if cached {
        Arc::clone(&cache)
    } else {
        Arc::new(String::from("symbol"))
    };
    let interned = ensures_equal!(interned, cache);
    Arc::strong_count(&interned)
}

fn drain(levels: i64) -> i64 {
    let limit = 3;
    let mut depth = 0;
    for _ in 0..levels {
        depth += 1;
        invariant!(depth <= limit);
    }
    depth
}

fn cursor(present: bool) -> char {
    let text = "dbc";
    let current = if present { text.chars().next() } else { None };
    match invariant_non_null!(current) {
        Some(c) => c,
        None => fail!(),
    }
}

fn anchor(same: bool) -> i32 {
    let frames = [10, 20];
    let top = &frames[0];
    let expected = if same { &frames[0] } else { &frames[1] };
    *invariant_equal!(top, expected)
}

fn dispatch(code: i64) -> &'static str {
    match code {
        0 => "read",
        1 => "write",
        _ => fail!(),
    }
}

fn weak(n: i64) -> u32 {
    let evaluated = Cell::new(0);
    let record = |ok: bool| {
        evaluated.set(evaluated.get() + 1);
        ok
    };
    weak_requires!(record(n > 0));
    evaluated.get()
}

fn print_help() {
    eprintln!(
        "\
Usage: dbc-probe <scenario> [arg]

Scenarios:
  area <n>                 requires!(x > 0)
  slot some|none           requires_non_null!(ptr)
  attach same|other        requires_equal!(handle_a, handle_b)
  halve <n>                ensures!(half * 2 == n)
  find-user <name>         ensures_non_null!(found)
  intern cached|fresh      ensures_equal!(interned, cache)
  drain <n>                invariant!(depth <= limit) in a loop
  cursor some|none         invariant_non_null!(current)
  anchor same|other        invariant_equal!(top, expected)
  dispatch <code>          fail!() on unknown codes
  weak <n>                 weak_requires!(record(n > 0))"
    );
}
