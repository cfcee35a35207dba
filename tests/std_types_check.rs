use tola_copyable::classify::{IsArithmetic, IsContainer, IsTextString, IsTrivial};
use tola_copyable::logic::Predicate;
use tola_copyable::prelude::*;

#[test]
fn test_std_types_shapes() {
    // std::net addresses are plain values
    #[cfg(feature = "std")]
    {
        use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
        assert!(<IsTrivial<IpAddr> as Predicate>::VALUE);
        assert!(is_copyable::<Ipv4Addr>());
        assert!(is_copyable::<Ipv6Addr>());
        assert!(is_copyable::<SocketAddr>());
        assert!(!<IsArithmetic<SocketAddr> as Predicate>::VALUE);
    }

    // std::time
    #[cfg(feature = "std")]
    {
        use std::time::{Instant, SystemTime};
        assert!(is_copyable::<Instant>());
        assert!(is_copyable::<SystemTime>());
        assert!(is_copyable::<Vec<(SystemTime, u32)>>());
    }

    // std::thread: the id is a value, the handle is shared
    #[cfg(feature = "std")]
    {
        use std::thread::{Thread, ThreadId};
        assert!(is_copyable::<ThreadId>());
        assert!(!is_copyable::<Thread>());
    }

    // std::sync and std::fs hold resources
    #[cfg(feature = "std")]
    {
        use std::sync::{Mutex, OnceLock, RwLock};
        assert!(!is_copyable::<Mutex<i32>>());
        assert!(!is_copyable::<RwLock<String>>());
        assert!(!is_copyable::<OnceLock<u8>>());
        assert!(!is_copyable::<std::fs::File>());
        assert!(!is_copyable::<Vec<Mutex<i32>>>());
    }

    // std::ffi and std::collections
    #[cfg(feature = "std")]
    {
        use std::collections::{HashMap, HashSet};
        use std::ffi::OsString;
        assert!(<IsTextString<OsString> as Predicate>::VALUE);
        assert!(!<IsContainer<OsString> as Predicate>::VALUE);
        assert!(<IsContainer<HashSet<u8>> as Predicate>::VALUE);
        assert!(is_copyable::<HashMap<OsString, Vec<u8>>>());
    }
}
