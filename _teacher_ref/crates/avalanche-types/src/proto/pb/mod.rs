// @generated
// @@protoc_insertion_point(attribute:aliasreader)
pub mod aliasreader {
    include!("aliasreader.rs");
    // @@protoc_insertion_point(aliasreader)
}
// @@protoc_insertion_point(attribute:appsender)
pub mod appsender {
    include!("appsender.rs");
    // @@protoc_insertion_point(appsender)
}
pub mod google {
    // @@protoc_insertion_point(attribute:google.protobuf)
    pub mod protobuf {
        include!("google.protobuf.rs");
        // @@protoc_insertion_point(google.protobuf)
    }
}
// @@protoc_insertion_point(attribute:helloworld)
pub mod helloworld {
    include!("helloworld.rs");
    // @@protoc_insertion_point(helloworld)
}
// @@protoc_insertion_point(attribute:http)
pub mod http {
    include!("http.rs");
    // @@protoc_insertion_point(http)
    // @@protoc_insertion_point(attribute:http.responsewriter)
    pub mod responsewriter {
        include!("http.responsewriter.rs");
        // @@protoc_insertion_point(http.responsewriter)
    }
}
pub mod io {
    pub mod prometheus {
        // @@protoc_insertion_point(attribute:io.prometheus.client)
        pub mod client {
            include!("io.prometheus.client.rs");
            // @@protoc_insertion_point(io.prometheus.client)
        }
    }
    // @@protoc_insertion_point(attribute:io.reader)
    pub mod reader {
        include!("io.reader.rs");
        // @@protoc_insertion_point(io.reader)
    }
    // @@protoc_insertion_point(attribute:io.writer)
    pub mod writer {
        include!("io.writer.rs");
        // @@protoc_insertion_point(io.writer)
    }
}
// @@protoc_insertion_point(attribute:keystore)
pub mod keystore {
    include!("keystore.rs");
    // @@protoc_insertion_point(keystore)
}
// @@protoc_insertion_point(attribute:message)
pub mod message {
    include!("message.rs");
    // @@protoc_insertion_point(message)
}
// @@protoc_insertion_point(attribute:messenger)
pub mod messenger {
    include!("messenger.rs");
    // @@protoc_insertion_point(messenger)
}
pub mod net {
    // @@protoc_insertion_point(attribute:net.conn)
    pub mod conn {
        include!("net.conn.rs");
        // @@protoc_insertion_point(net.conn)
    }
}
// @@protoc_insertion_point(attribute:p2p)
pub mod p2p {
    include!("p2p.rs");
    // @@protoc_insertion_point(p2p)
}
// @@protoc_insertion_point(attribute:rpcdb)
pub mod rpcdb {
    include!("rpcdb.rs");
    // @@protoc_insertion_point(rpcdb)
}
// @@protoc_insertion_point(attribute:sharedmemory)
pub mod sharedmemory {
    include!("sharedmemory.rs");
    // @@protoc_insertion_point(sharedmemory)
}
// @@protoc_insertion_point(attribute:sync)
pub mod sync {
    include!("sync.rs");
    // @@protoc_insertion_point(sync)
}
// @@protoc_insertion_point(attribute:validatorstate)
pub mod validatorstate {
    include!("validatorstate.rs");
    // @@protoc_insertion_point(validatorstate)
}
// @@protoc_insertion_point(attribute:vm)
pub mod vm {
    include!("vm.rs");
    // @@protoc_insertion_point(vm)
    // @@protoc_insertion_point(attribute:vm.runtime)
    pub mod runtime {
        include!("vm.runtime.rs");
        // @@protoc_insertion_point(vm.runtime)
    }
}
// @@protoc_insertion_point(attribute:warp)
pub mod warp {
    include!("warp.rs");
    // @@protoc_insertion_point(warp)
}
