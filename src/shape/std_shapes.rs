//! Shapes for primitive, core, alloc and std types.
//!
//! | Kind | Types | Verdict |
//! |------|-------|---------|
//! | arithmetic | integers, floats, `bool`, `char` | copyable |
//! | trivial | `NonZero*`, `Duration`, `Ordering`, `PhantomData`, `Instant`, `SystemTime`, IP/socket addresses, `ThreadId` | copyable |
//! | trivial if inner | `Wrapping<T>`, `Saturating<T>`, `Reverse<T>`, `Range<T>`, `RangeInclusive<T>` | follows `T` |
//! | trivial if all | `Result<T, E>` | follows `T` and `E` |
//! | text | `String`, `Box<str>`, `Cow<'_, str>`, `CString`, `OsString` | copyable |
//! | container | `[T; N]`, `Option<T>`, `Vec`, `VecDeque`, `LinkedList`, `BinaryHeap`, `BTreeSet`, `HashSet` | follows element |
//! | map | `BTreeMap<K, V>`, `HashMap<K, V, S>` (element `(K, V)`) | follows key and value |
//! | opaque | `Box<T>`, `Rc`, `Arc`, `Weak`, cells, locks, `File`, `Thread` | not copyable |
//! | pointer | `&T`, `&mut T`, `*const T`, `*mut T`, `NonNull<T>` | not copyable |

macros::define_std_shapes!();
