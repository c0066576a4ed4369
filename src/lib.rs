#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

/*!
Ordering of services located by DNS SRV records.

# Introduction

SRV Records, as defined in [RFC 2782](https://tools.ietf.org/html/rfc2782),
are DNS records of the form

`_Service._Proto.Name TTL Class SRV Priority Weight Port Target`

For instance, a DNS server might respond with the following SRV records for
`_http._tcp.example.com`:

```text
_http._tcp.example.com. 60 IN SRV 1 100 443 test1.example.com.
_http._tcp.example.com. 60 IN SRV 2 50  443 test2.example.com.
_http._tcp.example.com. 60 IN SRV 2 0   443 test3.example.com.
```

A client wanting to communicate with this example service should first try
`test1.example.com:443` (the record with the lowest priority), then the other
two, with `test2.example.com` far more likely to come before
`test3.example.com` since its weight is larger.

`srv-order` produces that order. [`order_records`] groups records by
priority and orders each group by weighted random selection, producing a
fresh order on every call:

```
use srv_order::{order_records, ServiceRecord};
let records = vec![
    ServiceRecord::new(2, 50, 443, "test2.example.com."),
    ServiceRecord::new(1, 100, 443, "test1.example.com."),
    ServiceRecord::new(2, 0, 443, "test3.example.com."),
];
let (count, ordered) = order_records(records);
assert_eq!(count, 3);
assert_eq!(ordered[0].target, "test1.example.com.");
for record in ordered {
    // Try `record`, moving on to the next one if it fails
}
```

[`SrvResolver::resolve_ordered`] performs the lookup through a resolver
backend and hands the records to the same ordering. Trying the records in
order and falling through on failure is left to the caller.

# Resolvers and Randomness

Any lookup backend can be used by implementing [`SrvResolver`]. The provided
backend is enabled by the following feature:

- `hickory` (via [`hickory_resolver::Resolver`])

Ordering draws from the thread-local [`rand`] RNG unless a [`RandomSource`]
is passed to [`order_records_with_rng`], which allows seeded, reproducible
orders.

[`SrvResolver`]: resolver::SrvResolver
[`SrvResolver::resolve_ordered`]: resolver::SrvResolver::resolve_ordered
*/

mod record;
pub use record::{ServiceRecord, SrvRecord};

pub mod order;
pub use order::{order_records, order_records_with_rng, RandomSource};

pub mod resolver;
pub use resolver::LookupError;
