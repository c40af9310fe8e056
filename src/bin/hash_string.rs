use std::env;

fn main() {
    for arg in env::args().skip(1) {
        let bytes = arg.as_bytes();

        println!("{arg}");
        println!("  xxh32     {:08x}", hash_depot::hash32(bytes, 0));
        println!("  xxh64     {:016x}", hash_depot::hash64(bytes, 0));
        println!("  xxh3_64   {:016x}", hash_depot::xxh3_hash64(bytes, 0));
        println!("  fnv1a_32  {:08x}", hash_depot::fnv1a_32(bytes));
        println!("  fnv1a_64  {:016x}", hash_depot::fnv1a_64(bytes));
        println!("  murmur3   {:08x}", hash_depot::murmur3_32(bytes, 0));
        println!("  murmur128 {:032x}", hash_depot::murmur3_128(bytes, 0));
    }
}
