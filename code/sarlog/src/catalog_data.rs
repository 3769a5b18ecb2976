// Counter descriptions as documented by sar(1) and the kernel sources.  Keep sorted by name;
// `lookup` relies on it for binary search.

use crate::catalog::{Entry, ValueKind};

pub(crate) static ENTRIES: &[Entry] = &[
    Entry {
        name: "%Iused",
        category: "Files",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Inodes Used %"#,
        detail: None,
    },
    Entry {
        name: "%commit",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of memory needed for current workload in relation to the total amount of memory (RAM+swap). This number may be greater than 100% because the kernel usually overcommits memory"#,
        detail: None,
    },
    Entry {
        name: "%dquot-sz",
        category: "Files",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of allocated disk quota entries with regard to the maximum number of cached disk quota entries that can be allocated"#,
        detail: None,
    },
    Entry {
        name: "%fsused",
        category: "Files",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"FS Used %"#,
        detail: None,
    },
    Entry {
        name: "%gnice",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time spent by the CPU or CPUs to run a niced guest"#,
        detail: None,
    },
    Entry {
        name: "%guest",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time spent by the CPU or CPUs to run a virtual processor"#,
        detail: None,
    },
    Entry {
        name: "%hugused",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of total hugepages memory that has been allocated"#,
        detail: None,
    },
    Entry {
        name: "%idle",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time that the CPU or CPUs were idle and the system did not have an outstanding disk I/O request"#,
        detail: None,
    },
    Entry {
        name: "%iowait",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time that the CPU or CPUs were idle during which the system had an outstanding disk I/O request"#,
        detail: None,
    },
    Entry {
        name: "%irq",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time spent by the CPU or CPUs to service hardware interrupts"#,
        detail: None,
    },
    Entry {
        name: "%memused",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of used memory"#,
        detail: None,
    },
    Entry {
        name: "%nice",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of CPU utilization that occurred while executing at the user level with nice priority"#,
        detail: None,
    },
    Entry {
        name: "%rtsig-sz",
        category: "Other",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of queued RT signals with regard to the maximum number of RT signals that can be queued"#,
        detail: None,
    },
    Entry {
        name: "%soft",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time spent by the CPU or CPUs to service software interrupts"#,
        detail: None,
    },
    Entry {
        name: "%steal",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of time that the CPU or CPUs were idle and the system did not have an outstanding disk I/O request"#,
        detail: None,
    },
    Entry {
        name: "%super-sz",
        category: "Files",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of allocated super block handlers with regard to the maximum number of super block handlers that Linux can allocate"#,
        detail: None,
    },
    Entry {
        name: "%swpcad",
        category: "Swap",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of cached swap memory in relation to the amount of used swap space"#,
        detail: None,
    },
    Entry {
        name: "%swpused",
        category: "Swap",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of used swap space"#,
        detail: None,
    },
    Entry {
        name: "%sys",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of CPU utilization that occurred while executing at the system level (kernel). Note that this field does NOT include time spent servicing hardware or software interrupts"#,
        detail: None,
    },
    Entry {
        name: "%system",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: None,
        desc: r#"Percentage of CPU utilization that occurred while executing at the system level (kernel). Note that this field includes time spent servicing hardware and software interrupts"#,
        detail: None,
    },
    Entry {
        name: "%temp",
        category: "Power",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"FAN"#,
        detail: None,
    },
    Entry {
        name: "%ufsused",
        category: "Files",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"FS uUsed %"#,
        detail: None,
    },
    Entry {
        name: "%user",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: Some("User Utilization (%)"),
        desc: r#"Percentage of CPU utilization that occurred while executing at the user level (application). Note that this field includes time spent running virtual processors"#,
        detail: Some(r#"Column 1 of /proc/stat"#),
    },
    Entry {
        name: "%usr",
        category: "Utilization",
        kind: ValueKind::Decimal,
        unit: Some("percentage"),
        label: Some("User Utilization (novirt %)"),
        desc: r#"Percentage of CPU utilization that occurred while executing at the user level (application). Note that this field does NOT include time spent running virtual processors"#,
        detail: None,
    },
    Entry {
        name: "%util",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Percentage of CPU time during which I/O requests were issued to the device (bandwidth utilization for the device). Device saturation occurs when this value is close to 100%"#,
        detail: None,
    },
    Entry {
        name: "%vmeff",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Calculated as pgsteal / pgscan, this is a metric of the efficiency of page reclaim. If it is near 100% then almost every page coming off the tail of the inactive list is being reaped. If it gets too low (e.g. less than 30%) then the virtual memory is having some difficulty. This field is displayed as zero if no pages have been scanned during the interval of time"#,
        detail: None,
    },
    Entry {
        name: "FAN",
        category: "Power",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"FAN"#,
        detail: None,
    },
    Entry {
        name: "Ifree",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Inodes Free"#,
        detail: None,
    },
    Entry {
        name: "Iused",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Inodes Used"#,
        detail: None,
    },
    Entry {
        name: "MBfsfree",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"MB Free"#,
        detail: None,
    },
    Entry {
        name: "MBfsused",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"MB Used"#,
        detail: None,
    },
    Entry {
        name: "MHz",
        category: "Power",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"MegaHertz"#,
        detail: None,
    },
    Entry {
        name: "access/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "access" RPC calls made per second"#,
        detail: None,
    },
    Entry {
        name: "active/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of times TCP connections have made a direct transition to the SYN-SENT state from the CLOSED state per second [tcpActiveOpens]"#,
        detail: None,
    },
    Entry {
        name: "asmf/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of failures detected per second by the IP re-assembly algorithm (for whatever reason: timed out, errors, etc) [ipReasmFails]. Note that this is not necessarily a count of discarded IP fragments since some algorithms can lose track of the number of fragments by combining them as they are received"#,
        detail: None,
    },
    Entry {
        name: "asmf6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of failures detected per second by the IPv6 re-assembly algorithm (for whatever reason: timed out, errors, etc.) [ipv6IfStatsReasmFails]. Note that this is not necessarily a count of discarded IPv6 fragments since some algorithms can lose track of the number of fragments by combining them as they are received"#,
        detail: None,
    },
    Entry {
        name: "asmok/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP datagrams successfully re-assembled per second [ipReasmOKs]"#,
        detail: None,
    },
    Entry {
        name: "asmok6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IPv6 datagrams successfully reassembled per second [ipv6IfStatsReasmOKs]"#,
        detail: None,
    },
    Entry {
        name: "asmrq/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP fragments received per second which needed to be reassembled at this entity [ipReasmReqds]"#,
        detail: None,
    },
    Entry {
        name: "asmrq6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IPv6 fragments received per second which needed to be reassembled at this interface [ipv6IfStatsReasmReqds"#,
        detail: None,
    },
    Entry {
        name: "atmptf/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of times per second TCP connections have made a direct transition to the CLOSED state from either the SYN-SENT state or the SYN-RCVD state, plus the number of times per second TCP connections have made a direct transition to the LISTEN state from the SYN-RCVD state [tcpAttemptFails]"#,
        detail: None,
    },
    Entry {
        name: "avgqu-sz",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The average queue length of the requests that were issued to the device."#,
        detail: None,
    },
    Entry {
        name: "avgrq-sz",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The average size (in sectors) of the requests that were issued to the device."#,
        detail: None,
    },
    Entry {
        name: "await",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The average time (in milliseconds) for I/O requests issued to the device to be served. This includes the time spent by the requests in queue and the time spent servicing them."#,
        detail: None,
    },
    Entry {
        name: "badcall/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of bad RPC requests received per second, those whose processing generated an error"#,
        detail: None,
    },
    Entry {
        name: "blocked",
        category: "Load",
        kind: ValueKind::Integer,
        unit: Some("number"),
        label: None,
        desc: r#"Number of tasks currently blocked, waiting for I/O to complete"#,
        detail: None,
    },
    Entry {
        name: "bread/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total amount of data read from the devices in blocks per second. Blocks are equivalent to sectors with 2.4 kernels and newer and therefore have a size of 512 bytes. With older kernels, a block is of indeterminate size"#,
        detail: None,
    },
    Entry {
        name: "brk/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of breaks per second for current serial line"#,
        detail: None,
    },
    Entry {
        name: "bufpg/s",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of additional memory pages used as buffers by the system per second. A negative value means fewer pages used as buffers by the system"#,
        detail: None,
    },
    Entry {
        name: "bwrtn/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total amount of data written to devices in blocks per second"#,
        detail: None,
    },
    Entry {
        name: "call/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of RPC requests made per second"#,
        detail: None,
    },
    Entry {
        name: "campg/s",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of additional memory pages cached by the system per second. A negative value means fewer pages in the cache"#,
        detail: None,
    },
    Entry {
        name: "coll/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of collisions that happened per second while transmitting packets"#,
        detail: None,
    },
    Entry {
        name: "cswch/s",
        category: "Load",
        kind: ValueKind::Decimal,
        unit: Some("number_per_second"),
        label: None,
        desc: r#"Total number of context switches per second"#,
        detail: None,
    },
    Entry {
        name: "degC",
        category: "Power",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Degrees"#,
        detail: None,
    },
    Entry {
        name: "dentunusd",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of unused cache entries in the directory cache"#,
        detail: None,
    },
    Entry {
        name: "dquot-sz",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of allocated disk quota entries"#,
        detail: None,
    },
    Entry {
        name: "drpm",
        category: "Power",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"DRPM"#,
        detail: None,
    },
    Entry {
        name: "estres/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of times per second TCP connections have made a direct transition to the CLOSED state from either the ESTABLISHED state or the CLOSE-WAIT state [tcpEstabResets]"#,
        detail: None,
    },
    Entry {
        name: "fault/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of page faults (major + minor) made by the system per second. This is not a count of page faults that generate I/O, because some page faults can be resolved without I/O"#,
        detail: None,
    },
    Entry {
        name: "file-nr",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of file handles used by the system"#,
        detail: None,
    },
    Entry {
        name: "file-sz",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of used file handles"#,
        detail: None,
    },
    Entry {
        name: "fragcr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of output datagram fragments that have been generated per second as a result of fragmentation at this output interface [ipv6IfStatsOutFragCreates]"#,
        detail: None,
    },
    Entry {
        name: "fragcrt/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP datagram fragments that have been generated per second as a result of fragmentation at this entity [ipFragCreates]"#,
        detail: None,
    },
    Entry {
        name: "fragf/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP datagrams that have been discarded per second because they needed to be fragmented at this entity but could not be, e.g., because their Don't Fragment flag was set [ipFragFails]"#,
        detail: None,
    },
    Entry {
        name: "fragf6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IPv6 datagrams that have been discarded per second because they needed to be fragmented at this output interface but could not be [ipv6IfStatsOutFragFails]"#,
        detail: None,
    },
    Entry {
        name: "fragok/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP datagrams that have been successfully fragmented at this entity per second [ipFragOKs]"#,
        detail: None,
    },
    Entry {
        name: "fragok6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IPv6 datagrams that have been successfully fragmented at this output interface per second [ipv6IfStatsOutFragOKs]"#,
        detail: None,
    },
    Entry {
        name: "framerr/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of frame errors per second for current serial line"#,
        detail: None,
    },
    Entry {
        name: "frmpg/s",
        category: "Memory",
        kind: ValueKind::Decimal,
        unit: Some("number_per_second"),
        label: None,
        desc: r#"Number of memory pages freed by the system per second. A negative value represents a number of pages allocated by the system. Note that a page has a size of 4 kB or 8 kB according to the machine architecture"#,
        detail: None,
    },
    Entry {
        name: "fwddgm/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams per second, for which this entity was not their final IP destination, as a result of which an attempt was made to find a route to forward them to that final destination [ipForwDatagrams]"#,
        detail: None,
    },
    Entry {
        name: "fwddgm6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of output datagrams per second which this entity received and forwarded to their final destinations [ipv6IfStatsOutForwDatagrams]"#,
        detail: None,
    },
    Entry {
        name: "getatt/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "getattr" RPC calls made per second"#,
        detail: None,
    },
    Entry {
        name: "hit/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of reply cache hits per second"#,
        detail: None,
    },
    Entry {
        name: "i2big6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams that could not be forwarded per second because their size exceeded the link MTU of outgoing interface [ipv6IfStatsInTooBigErrors]"#,
        detail: None,
    },
    Entry {
        name: "iadrer6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second because the IPv6 address in their IPv6 header's destination field was not a valid address to be received at this entity. This count includes invalid addresses (e.g., ::0) and unsupported addresses (e.g., addresses with unallocated prefixes). For entities which are not IPv6 routers and therefore do not forward datagrams, this counter includes datagrams discarded because the destination address was not a local address [ipv6IfStatsInAddrErrors]"#,
        detail: None,
    },
    Entry {
        name: "iadrerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second because the IP address in their IP header's destination field was not a valid address to be received at this entity. This count includes invalid addresses (e.g., 0.0.0.0) and addresses of unsupported Classes (e.g., Class E). For entities which are not IP routers and therefore do not forward datagrams, this counter includes datagrams discarded because the destination address was not a local address [ipInAddrErrors]."#,
        detail: None,
    },
    Entry {
        name: "iadrmk/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Address Mask Request messages received per second [icmpInAddrMasks]"#,
        detail: None,
    },
    Entry {
        name: "iadrmkr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Address Mask Reply messages received per second [icmpInAddrMaskReps]"#,
        detail: None,
    },
    Entry {
        name: "idel/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of input datagrams successfully delivered per second to IP user-protocols (including ICMP) [ipInDelivers]"#,
        detail: None,
    },
    Entry {
        name: "idel6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of datagrams successfully delivered per second to IPv6 user-protocols (including ICMP) [ipv6IfStatsInDelivers"#,
        detail: None,
    },
    Entry {
        name: "idgm/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of UDP datagrams delivered per second to UDP users [udpInDatagrams]"#,
        detail: None,
    },
    Entry {
        name: "idgm6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of UDP datagrams delivered per second to UDP users [udpInDatagrams]"#,
        detail: None,
    },
    Entry {
        name: "idgmer6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of received UDP datagrams per second that could not be delivered for reasons other than the lack of an application at the destination port [udpInErrors]"#,
        detail: None,
    },
    Entry {
        name: "idgmerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of received UDP datagrams per second that could not be delivered for reasons other than the lack of an application at the destination port [udpInErrors]"#,
        detail: None,
    },
    Entry {
        name: "idisc/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input IP datagrams per second for which no problems were encountered to prevent their continued processing, but which were discarded (e.g., for lack of buffer space) [ipInDiscards]. Note that this counter does not include any datagrams discarded while awaiting re-assembly"#,
        detail: None,
    },
    Entry {
        name: "idisc6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input IPv6 datagrams per second for which no problems were encountered to prevent their continued processing, but which were discarded (e.g., for lack of buffer space) [ipv6IfStatsInDiscards]. Note that this counter does not include any datagrams discarded while awaiting re-assembly"#,
        detail: None,
    },
    Entry {
        name: "idstunr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Destination Unreachable messages received per second [icmpInDestUnreachs]"#,
        detail: None,
    },
    Entry {
        name: "idtunr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Destination Unreachable messages received by the interface per second [ipv6IfIcmpInDestUnreachs]"#,
        detail: None,
    },
    Entry {
        name: "iech/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo (request) messages received per second [icmpInEchos]"#,
        detail: None,
    },
    Entry {
        name: "iech6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo (request) messages received by the interface per second [ipv6IfIcmpInEchos]"#,
        detail: None,
    },
    Entry {
        name: "iechr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo Reply messages received per second [icmpInEchoReps]"#,
        detail: None,
    },
    Entry {
        name: "iechr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo Reply messages received by the interface per second [ipv6IfIcmpInEchoReplies]"#,
        detail: None,
    },
    Entry {
        name: "ierr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP messages per second which the entity received but determined as having ICMP-specific errors (bad ICMP checksums, bad length, etc.) [icmpInErrors]."#,
        detail: None,
    },
    Entry {
        name: "ierr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP messages per second which the interface received but determined as having ICMP-specific errors (bad ICMP checksums, bad length, etc.) [ipv6IfIcmpInErrors]"#,
        detail: None,
    },
    Entry {
        name: "igmbq6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMPv6 Group Membership Query messages received by the interface per second [ipv6IfIcmpInGroupMembQueries]"#,
        detail: None,
    },
    Entry {
        name: "igmbr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMPv6 Group Membership Response messages received by the interface per second [ipv6IfIcmpInGroupMembResponses]"#,
        detail: None,
    },
    Entry {
        name: "igmbrd6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMPv6 Group Membership Reduction messages received by the interface per second [ipv6IfIcmpInGroupMembReductions]."#,
        detail: None,
    },
    Entry {
        name: "ihdrer6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second due to errors in their IPv6 headers, including version number mismatch, other format errors, hop count exceeded, errors discovered in processing their IPv6 options, etc. [ipv6IfStatsInHdrErrors]"#,
        detail: None,
    },
    Entry {
        name: "ihdrerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second due to errors in their IP headers, including bad checksums, version number mismatch, other format errors, time-to-live exceeded, errors discovered in processing their IP options, etc. [ipInHdrErrors]"#,
        detail: None,
    },
    Entry {
        name: "imcpck6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of multicast packets received per second by the interface [ipv6IfStatsInMcastPkts]"#,
        detail: None,
    },
    Entry {
        name: "imsg/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of ICMP messages which the entity received per second [icmpInMsgs]. Note that this counter includes all those counted by ierr/s"#,
        detail: None,
    },
    Entry {
        name: "imsg6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of ICMP messages received by the interface per second which includes all those counted by ierr6/s [ipv6IfIcmpInMsgs]"#,
        detail: None,
    },
    Entry {
        name: "inbad6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Neighbor Advertisement messages received by the interface per second [ipv6IfIcmpInNeighborAdvertisements]"#,
        detail: None,
    },
    Entry {
        name: "inbsol6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Neighbor Solicit messages received by the interface per second [ipv6IfIcmpInNeighborSolicits]"#,
        detail: None,
    },
    Entry {
        name: "inode-nr",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of inode handlers used by the system"#,
        detail: None,
    },
    Entry {
        name: "inode-sz",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of used inode handlers"#,
        detail: None,
    },
    Entry {
        name: "inort6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second because no route could be found to transmit them to their destination [ipv6IfStatsInNoRoutes]"#,
        detail: None,
    },
    Entry {
        name: "intr/s",
        category: "Interrupts",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#""#,
        detail: None,
    },
    Entry {
        name: "ip-frag",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of IP fragments currently in use"#,
        detail: None,
    },
    Entry {
        name: "ip6-frag",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of IPv6 fragments currently in use"#,
        detail: None,
    },
    Entry {
        name: "iparmpb/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Parameter Problem messages received per second [icmpInParmProbs]"#,
        detail: None,
    },
    Entry {
        name: "ipck2b6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Packet Too Big messages received by the interface per second [ipv6IfIcmpInPktTooBigs]"#,
        detail: None,
    },
    Entry {
        name: "iprmpb6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Parameter Problem messages received by the interface per second [ipv6IfIcmpInParmProblems]"#,
        detail: None,
    },
    Entry {
        name: "irec/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of input datagrams received from interfaces per second, including those received in error [ipInReceives]."#,
        detail: None,
    },
    Entry {
        name: "irec6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of input datagrams received from interfaces per second, including those received in error [ipv6IfStatsInReceives]"#,
        detail: None,
    },
    Entry {
        name: "iredir/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Redirect messages received per second [icmpInRedirects]"#,
        detail: None,
    },
    Entry {
        name: "iredir6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of Redirect messages received by the interface per second [ipv6IfIcmpInRedirects]"#,
        detail: None,
    },
    Entry {
        name: "irtad6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Router Advertisement messages received by the interface per second [ipv6IfIcmpInRouterAdvertisements]"#,
        detail: None,
    },
    Entry {
        name: "irtsol6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Router Solicit messages received by the interface per second [ipv6IfIcmpInRouterSolicits]."#,
        detail: None,
    },
    Entry {
        name: "iseg/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of segments received per second, including those received in error [tcpInSegs]. This count includes segments received on currently established connections."#,
        detail: None,
    },
    Entry {
        name: "isegerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of segments received in error (e.g., bad TCP checksums) per second [tcpInErrs]"#,
        detail: None,
    },
    Entry {
        name: "isrcq/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Source Quench messages received per second [icmpInSrcQuenchs]"#,
        detail: None,
    },
    Entry {
        name: "itm/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Timestamp (request) messages received per second [icmpInTimestamps]"#,
        detail: None,
    },
    Entry {
        name: "itmex/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Time Exceeded messages received per second [icmpInTimeExcds]"#,
        detail: None,
    },
    Entry {
        name: "itmex6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Time Exceeded messages received by the interface per second [ipv6IfIcmpInTimeExcds]"#,
        detail: None,
    },
    Entry {
        name: "itmr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Timestamp Reply messages received per second [icmpInTimestampReps]"#,
        detail: None,
    },
    Entry {
        name: "itrpck6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of input datagrams discarded per second because datagram frame didn't carry enough data [ipv6IfStatsInTruncatedPkts]"#,
        detail: None,
    },
    Entry {
        name: "iukwnp6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of locally-addressed datagrams received successfully but discarded per second because of an unknown or unsupported protocol [ipv6IfStatsInUnknownProtos]"#,
        detail: None,
    },
    Entry {
        name: "iukwnpr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of locally-addressed datagrams received successfully but discarded per second because of an unknown or unsupported protocol [ipInUnknownProtos]."#,
        detail: None,
    },
    Entry {
        name: "kbactive",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of active memory in kilobytes (memory that has been used more recently and usually not reclaimed unless absolutely necessary)"#,
        detail: None,
    },
    Entry {
        name: "kbbuffers",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of memory used as buffers by the kernel in kilobytes"#,
        detail: None,
    },
    Entry {
        name: "kbcached",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of memory used to cache data by the kernel in kilobytes"#,
        detail: None,
    },
    Entry {
        name: "kbcommit",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of memory in kilobytes needed for current workload. This is an estimate of how much RAM/swap is needed to guarantee that there never is out of memory"#,
        detail: None,
    },
    Entry {
        name: "kbdirty",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of memory in kilobytes waiting to get written back to the disk."#,
        detail: None,
    },
    Entry {
        name: "kbhugfree",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of hugepages memory in kilobytes that is not yet allocated"#,
        detail: None,
    },
    Entry {
        name: "kbhugused",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of hugepages memory in kilobytes that has been allocated"#,
        detail: None,
    },
    Entry {
        name: "kbinact",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of inactive memory in kilobytes (memory which has been less recently used. It is more eligible to be reclaimed for other purposes)"#,
        detail: None,
    },
    Entry {
        name: "kbmemfree",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of free memory available in kilobytes"#,
        detail: None,
    },
    Entry {
        name: "kbmemused",
        category: "Memory",
        kind: ValueKind::Integer,
        unit: Some("kilobytes"),
        label: None,
        desc: r#"Amount of used memory in kilobytes. This does not take into account memory used by the kernel itself"#,
        detail: None,
    },
    Entry {
        name: "kbswpcad",
        category: "Swap",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Amount of cached swap memory in kilobytes. This is memory that once was swapped out, is swapped back in but still also is in the swap area (if memory is needed it doesn't need to be swapped out again because it is already in the swap area. This saves I/O)"#,
        detail: None,
    },
    Entry {
        name: "kbswpfree",
        category: "Swap",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Amount of free swap space in kilobytes"#,
        detail: None,
    },
    Entry {
        name: "kbswpused",
        category: "Swap",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Amount of used swap space in kilobytes"#,
        detail: None,
    },
    Entry {
        name: "ldavg-1",
        category: "Load",
        kind: ValueKind::Decimal,
        unit: Some("number"),
        label: None,
        desc: r#"System load average for the last minute. The load average is calculated as the average number of runnable or running tasks (R state), and the number of tasks in uninterruptible sleep (D state) over the specified interval. The exact formula is: <i>load(t) = n+((load(t-1)-n)/e^(interval/(min*60)))</i><br/> &bull;<i>load(t)</i>: load average at a time of t<br/> &bull;<i>n</i>: number of threads in running or uninterruptible state<br/> &bull;<i>interval</i>: calculate interval (seconds). 5 seconds in RHEL<br/> &bull;<i>min</i>: average time (minute)<br/> It is a moving average function. See <link href="http://lxr.free-electrons.com/source/kernel/sched.c?v=2.6.32#L3138"> <i>kernel/sched.c:calc_load()</i></link> for more details on the implementation on RHEL 5 and 6. More recent kernels moved it to <link href="http://lxr.free-electrons.com/source/kernel/sched.c?v=2.6.32#L3138"> <i>kernel/sched/proc.c:calc_load()</i></link>"#,
        detail: None,
    },
    Entry {
        name: "ldavg-15",
        category: "Load",
        kind: ValueKind::Decimal,
        unit: Some("number"),
        label: None,
        desc: r#"System load average for the past 15 minutes"#,
        detail: None,
    },
    Entry {
        name: "ldavg-5",
        category: "Load",
        kind: ValueKind::Decimal,
        unit: Some("number"),
        label: None,
        desc: r#"System load average for the past 5 minutes"#,
        detail: None,
    },
    Entry {
        name: "majflt/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of major faults the system has made per second, those which have required loading a memory page from disk"#,
        detail: None,
    },
    Entry {
        name: "maxpower",
        category: "Power",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Maxpower"#,
        detail: None,
    },
    Entry {
        name: "minflt/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of minor faults the task has made per second, those which have not required loading a memory page from disk"#,
        detail: None,
    },
    Entry {
        name: "miss/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of reply cache misses per second"#,
        detail: None,
    },
    Entry {
        name: "noport/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of received UDP datagrams per second for which there was no application at the destination port [udpNoPorts]"#,
        detail: None,
    },
    Entry {
        name: "noport6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of received UDP datagrams per second for which there was no application at the destination port [udpNoPorts]"#,
        detail: None,
    },
    Entry {
        name: "nswap/s",
        category: "Swap",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of pages from the process address space the system has swapped out per second. This value is always zero with post 2.5 kernels"#,
        detail: None,
    },
    Entry {
        name: "oadrmk/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Address Mask Request messages sent per second [icmpOutAddrMasks]"#,
        detail: None,
    },
    Entry {
        name: "oadrmkr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Address Mask Reply messages sent per second [icmpOutAddrMaskReps]"#,
        detail: None,
    },
    Entry {
        name: "odgm/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of UDP datagrams sent per second from this entity [udpOutDatagrams]"#,
        detail: None,
    },
    Entry {
        name: "odgm6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of UDP datagrams sent per second from this entity [udpOutDatagrams]."#,
        detail: None,
    },
    Entry {
        name: "odisc/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of output IP datagrams per second for which no problem was encountered to prevent their transmission to their destination, but which were discarded (e.g., for lack of buffer space) [ipOutDiscards]. Note that this counter would include datagrams counted in fwddgm/s if any such packets met this (discretionary) discard criterion"#,
        detail: None,
    },
    Entry {
        name: "odisc6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of output IPv6 datagrams per second for which no problem was encountered to prevent their transmission to their destination, but which were discarded (e.g., for lack of buffer space) [ipv6IfStatsOutDiscards]. Note that this counter would include datagrams counted in fwddgm6/s if any such packets met this (discretionary) discard criterion."#,
        detail: None,
    },
    Entry {
        name: "odstunr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Destination Unreachable messages sent per second [icmpOutDestUnreachs]"#,
        detail: None,
    },
    Entry {
        name: "odtunr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Destination Unreachable messages sent by the interface per second [ipv6IfIcmpOutDestUnreachs]"#,
        detail: None,
    },
    Entry {
        name: "oech/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo (request) messages sent per second [icmpOutEchos]"#,
        detail: None,
    },
    Entry {
        name: "oechr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo Reply messages sent per second [icmpOutEchoReps]"#,
        detail: None,
    },
    Entry {
        name: "oechr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Echo Reply messages sent by the interface per second [ipv6IfIcmpOutEchoReplies]"#,
        detail: None,
    },
    Entry {
        name: "oerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP messages per second which this entity did not send due to problems discovered within ICMP such as a lack of buffers [icmpOutErrors]"#,
        detail: None,
    },
    Entry {
        name: "ogmbr6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMPv6 Group Membership Response messages sent per second [ipv6IfIcmpOutGroupMembResponses]"#,
        detail: None,
    },
    Entry {
        name: "ogmbrd6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMPv6 Group Membership Reduction messages sent per second [ipv6IfIcmpOutGroupMembReductions]."#,
        detail: None,
    },
    Entry {
        name: "omcpck6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of multicast packets transmitted per second by the interface [ipv6IfStatsOutMcastPkts]"#,
        detail: None,
    },
    Entry {
        name: "omsg/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of ICMP messages which this entity attempted to send per second [icmpOutMsgs]. Note that this counter includes all those counted by oerr/s"#,
        detail: None,
    },
    Entry {
        name: "omsg6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of ICMP messages which this interface attempted to send per second [ipv6IfIcmpOutMsgs]"#,
        detail: None,
    },
    Entry {
        name: "onbad6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Neighbor Advertisement messages sent by the interface per second [ipv6IfIcmpOutNeighborAdvertisements]."#,
        detail: None,
    },
    Entry {
        name: "onbsol6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Neighbor Solicitation messages sent by the interface per second [ipv6IfIcmpOutNeighborSolicits]"#,
        detail: None,
    },
    Entry {
        name: "onort/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of IP datagrams discarded per second because no route could be found to transmit them to their destination [ipOutNoRoutes]. Note that this counter includes any packets counted in fwddgm/s which meet this 'no-route' criterion. Note that this includes any datagrams which a host cannot route because all of its default routers are down"#,
        detail: None,
    },
    Entry {
        name: "onort6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of locally generated IP datagrams discarded per second because no route could be found to transmit them to their destination [unknown formal SNMP name]"#,
        detail: None,
    },
    Entry {
        name: "oparmpb/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Parameter Problem messages sent per second [icmpOutParmProbs]"#,
        detail: None,
    },
    Entry {
        name: "opck2b6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Packet Too Big messages sent by the interface per second [ipv6IfIcmpOutPktTooBigs]"#,
        detail: None,
    },
    Entry {
        name: "oprmpb6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Parameter Problem messages sent by the interface per second [ipv6IfIcmpOutParmProblems]"#,
        detail: None,
    },
    Entry {
        name: "oredir/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Redirect messages sent per second [icmpOutRedirects]"#,
        detail: None,
    },
    Entry {
        name: "oredir6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of Redirect messages sent by the interface by second [ipv6IfIcmpOutRedirects]"#,
        detail: None,
    },
    Entry {
        name: "orq/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of IP datagrams which local IP user-protocols (including ICMP) supplied per second to IP in requests for transmission [ipOutRequests]. Note that this counter does not include any datagrams counted in fwddgm/s"#,
        detail: None,
    },
    Entry {
        name: "orq6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of IPv6 datagrams which local IPv6 user-protocols (including ICMP) supplied per second to IPv6 in requests for transmission [ipv6IfStatsOutRequests]. Note that this counter does not include any datagrams counted in fwddgm6/s"#,
        detail: None,
    },
    Entry {
        name: "orsts/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of TCP segments sent per second containing the RST flag [tcpOutRsts]"#,
        detail: None,
    },
    Entry {
        name: "ortsol6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Router Solicitation messages sent by the interface per second [ipv6IfIcmpOutRouterSolicits]"#,
        detail: None,
    },
    Entry {
        name: "oseg/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of segments sent per second, including those on current connections but excluding those containing only retransmitted octets [tcpOutSegs]"#,
        detail: None,
    },
    Entry {
        name: "osrcq/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Source Quench messages sent per second [icmpOutSrcQuenchs]"#,
        detail: None,
    },
    Entry {
        name: "otm/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Timestamp (request) messages sent per second [icmpOutTimestamps]"#,
        detail: None,
    },
    Entry {
        name: "otmex/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Time Exceeded messages sent per second [icmpOutTimeExcds]"#,
        detail: None,
    },
    Entry {
        name: "otmex6/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Time Exceeded messages sent by the interface per second [ipv6IfIcmpOutTimeExcds]"#,
        detail: None,
    },
    Entry {
        name: "otmr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of ICMP Timestamp Reply messages sent per second [icmpOutTimestampReps]"#,
        detail: None,
    },
    Entry {
        name: "ovrun/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of overrun errors per second for current serial line"#,
        detail: None,
    },
    Entry {
        name: "packet/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of network packets received per second"#,
        detail: None,
    },
    Entry {
        name: "passive/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The number of times TCP connections have made a direct transition to the SYN-RCVD state from the LISTEN state per second [tcpPassiveOpens]"#,
        detail: None,
    },
    Entry {
        name: "pgfree/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of pages placed on the free list by the system per second"#,
        detail: None,
    },
    Entry {
        name: "pgpgin/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of kilobytes the system paged in from disk per second. Note: With old kernels (2.2.x) this value is a number of blocks per second (and not kilobytes)"#,
        detail: None,
    },
    Entry {
        name: "pgpgout/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of kilobytes the system paged out to disk per second. Note: With old kernels (2.2.x) this value is a number of blocks per second (and not kilobytes)"#,
        detail: None,
    },
    Entry {
        name: "pgscand/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of pages scanned directly per second"#,
        detail: None,
    },
    Entry {
        name: "pgscank/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of pages scanned by the kswapd daemon per second"#,
        detail: None,
    },
    Entry {
        name: "pgsteal/s",
        category: "Paging",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of pages the system has reclaimed from cache (pagecache and swapcache) per second to satisfy its memory demands"#,
        detail: None,
    },
    Entry {
        name: "plist-sz",
        category: "Load",
        kind: ValueKind::Integer,
        unit: Some("number"),
        label: None,
        desc: r#"Number of tasks in the task list"#,
        detail: None,
    },
    Entry {
        name: "proc/s",
        category: "Load",
        kind: ValueKind::Decimal,
        unit: Some("number_per_second"),
        label: None,
        desc: r#"Total number of tasks created per second"#,
        detail: None,
    },
    Entry {
        name: "prtyerr/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of parity errors per second for current serial line"#,
        detail: None,
    },
    Entry {
        name: "pswpin/s",
        category: "Swap",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of swap pages the system brought in per second"#,
        detail: None,
    },
    Entry {
        name: "pswpout/s",
        category: "Swap",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of swap pages the system brought out per second"#,
        detail: None,
    },
    Entry {
        name: "pty-nr",
        category: "Other",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of pseudo-terminals used by the system"#,
        detail: None,
    },
    Entry {
        name: "raw6sck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of RAWv6 sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "rawsck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of RAW sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "rcvin/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of receive interrupts per second for current serial line. Serial line number is given in the TTY column"#,
        detail: None,
    },
    Entry {
        name: "rd_sec/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of sectors read from the device. The size of a sector is 512 bytes."#,
        detail: None,
    },
    Entry {
        name: "read/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "read" RPC calls made per second"#,
        detail: None,
    },
    Entry {
        name: "retrans/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of RPC requests per second, those which needed to be retransmitted (for example because of a server timeout)"#,
        detail: None,
    },
    Entry {
        name: "retrant/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The total number of segments retransmitted per second - that is, the number of TCP segments transmitted containing one or more previously transmitted octets [tcpRetransSegs]"#,
        detail: None,
    },
    Entry {
        name: "rpm",
        category: "Power",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"RPM"#,
        detail: None,
    },
    Entry {
        name: "rtps",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of read requests per second issued to physical devices"#,
        detail: None,
    },
    Entry {
        name: "rtsig-sz",
        category: "Other",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of queued RT signals"#,
        detail: None,
    },
    Entry {
        name: "runq-sz",
        category: "Load",
        kind: ValueKind::Integer,
        unit: Some("number"),
        label: None,
        desc: r#"Run queue length (number of tasks waiting for run time)"#,
        detail: None,
    },
    Entry {
        name: "rxbyt/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of bytes received per second"#,
        detail: None,
    },
    Entry {
        name: "rxcmp/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of compressed packets received per second (for cslip etc.)"#,
        detail: None,
    },
    Entry {
        name: "rxdrop/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of received packets dropped per second because of a lack of space in linux buffers"#,
        detail: None,
    },
    Entry {
        name: "rxerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of bad packets received per second"#,
        detail: None,
    },
    Entry {
        name: "rxfifo/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of FIFO overrun errors that happened per second on received packets"#,
        detail: None,
    },
    Entry {
        name: "rxfram/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of frame alignment errors that happened per second on received packets"#,
        detail: None,
    },
    Entry {
        name: "rxkB/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of kilobytes received per second"#,
        detail: None,
    },
    Entry {
        name: "rxmcst/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of multicast packets received per second"#,
        detail: None,
    },
    Entry {
        name: "rxpck/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of packets received per second"#,
        detail: None,
    },
    Entry {
        name: "saccess/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "access" RPC calls received per second"#,
        detail: None,
    },
    Entry {
        name: "scall/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of RPC requests received per second"#,
        detail: None,
    },
    Entry {
        name: "sgetatt/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "getattr" RPC calls received per second"#,
        detail: None,
    },
    Entry {
        name: "sread/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "read" RPC calls received per second"#,
        detail: None,
    },
    Entry {
        name: "super-sz",
        category: "Files",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of super block handlers allocated by the kernel"#,
        detail: None,
    },
    Entry {
        name: "svctm",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"The average service time (in milliseconds) for I/O requests that were issued to the device. Warning! Do not trust this field any more. This field will be removed in a future sysstat version."#,
        detail: None,
    },
    Entry {
        name: "swrite/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "write" RPC calls received per second"#,
        detail: None,
    },
    Entry {
        name: "tcp-tw",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of TCP sockets in TIME_WAIT state"#,
        detail: None,
    },
    Entry {
        name: "tcp/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of TCP packets received per second"#,
        detail: None,
    },
    Entry {
        name: "tcp6sck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of TCPv6 sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "tcpsck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of TCP sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "totsck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Total number of sockets used by the system"#,
        detail: None,
    },
    Entry {
        name: "tps",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Indicates the number of transfers per second that were issued to the device. Multiple logical requests can be combined into a single I/O request to the device. A transfer is of indeterminate size."#,
        detail: None,
    },
    Entry {
        name: "txbyt/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of bytes transmitted per 'regexp': _number_with_decimals_regexp, second"#,
        detail: None,
    },
    Entry {
        name: "txcarr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of carrier-errors that happened per second while transmitting packets"#,
        detail: None,
    },
    Entry {
        name: "txcmp/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of compressed packets transmitted per second"#,
        detail: None,
    },
    Entry {
        name: "txdrop/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of transmitted packets dropped per second because of a lack of space in linux buffers"#,
        detail: None,
    },
    Entry {
        name: "txerr/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of errors that happened per second while transmitting packets"#,
        detail: None,
    },
    Entry {
        name: "txfifo/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of FIFO overrun errors that happened per second on transmitted packets"#,
        detail: None,
    },
    Entry {
        name: "txkB/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of kilobytes transmitted per second"#,
        detail: None,
    },
    Entry {
        name: "txpck/s",
        category: "Network",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of packets transmitted per second"#,
        detail: None,
    },
    Entry {
        name: "udp/s",
        category: "NFSD",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of UDP packets received per second"#,
        detail: None,
    },
    Entry {
        name: "udp6sck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of UDPv6 sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "udpsck",
        category: "Network",
        kind: ValueKind::Integer,
        unit: None,
        label: None,
        desc: r#"Number of UDP sockets currently in use"#,
        detail: None,
    },
    Entry {
        name: "wr_sec/s",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of sectors written to the device. The size of a sector is 512 bytes."#,
        detail: None,
    },
    Entry {
        name: "write/s",
        category: "NFS",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of "write" RPC calls made per second"#,
        detail: None,
    },
    Entry {
        name: "wtps",
        category: "I/O",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Total number of write requests per second issued to physical devices"#,
        detail: None,
    },
    Entry {
        name: "xmtin/s",
        category: "TTY",
        kind: ValueKind::Decimal,
        unit: None,
        label: None,
        desc: r#"Number of transmit interrupts per second for current serial line"#,
        detail: Some(r#"Taken from /proc/net/dev"#),
    },
];
