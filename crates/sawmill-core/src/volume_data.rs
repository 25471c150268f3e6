//! 原木材積表資料（千分之一立方米）
//!
//! 列：長度 2.1 m 至 6.6 m（每 0.3 m），欄：直徑 12 cm 至 60 cm。

/// 支援的長度（以 0.1 m 為單位）
pub(crate) const LENGTHS_DM: [i64; 16] = [21, 24, 27, 30, 33, 36, 39, 42, 45, 48, 51, 54, 57, 60, 63, 66];

/// 支援的直徑（cm）
pub(crate) const DIAMETERS_CM: [i64; 49] = [
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53,
    54, 55, 56, 57, 58, 59, 60,
];

/// 材積（0.001 m³），`VOLUMES_L[長度索引][直徑索引]`
#[rustfmt::skip]
pub(crate) const VOLUMES_L: [[i64; 49]; 16] = [
    // 2.1 m
    [
        24, 28, 32, 37, 42, 48, 53, 60, 66, 73, 80, 87, 95, 103,
        111, 120, 129, 139, 148, 159, 169, 180, 191, 202, 214, 226, 238, 251,
        264, 277, 291, 305, 319, 334, 349, 364, 380, 396, 412, 429, 446, 463,
        481, 499, 517, 536, 555, 574, 594,
    ],
    // 2.4 m
    [
        27, 32, 37, 42, 48, 54, 61, 68, 75, 83, 91, 100, 109, 118,
        127, 137, 148, 159, 170, 181, 193, 205, 218, 231, 244, 258, 272, 287,
        302, 317, 333, 349, 365, 382, 399, 416, 434, 453, 471, 490, 510, 529,
        550, 570, 591, 612, 634, 656, 679,
    ],
    // 2.7 m
    [
        31, 36, 42, 48, 54, 61, 69, 77, 85, 94, 103, 112, 122, 133,
        143, 155, 166, 178, 191, 204, 217, 231, 245, 260, 275, 290, 306, 323,
        339, 356, 374, 392, 411, 429, 449, 468, 489, 509, 530, 552, 573, 596,
        618, 641, 665, 689, 713, 738, 763,
    ],
    // 3.0 m
    [
        34, 40, 46, 53, 60, 68, 76, 85, 94, 104, 114, 125, 136, 147,
        159, 172, 185, 198, 212, 226, 241, 257, 272, 289, 305, 323, 340, 358,
        377, 396, 416, 436, 456, 477, 499, 520, 543, 566, 589, 613, 637, 662,
        687, 713, 739, 766, 793, 820, 848,
    ],
    // 3.3 m
    [
        37, 44, 51, 58, 66, 75, 84, 94, 104, 114, 125, 137, 149, 162,
        175, 189, 203, 218, 233, 249, 265, 282, 300, 317, 336, 355, 374, 394,
        415, 436, 457, 479, 502, 525, 548, 573, 597, 622, 648, 674, 701, 728,
        756, 784, 813, 842, 872, 902, 933,
    ],
    // 3.6 m
    [
        41, 48, 55, 64, 72, 82, 92, 102, 113, 125, 137, 150, 163, 177,
        191, 206, 222, 238, 254, 272, 290, 308, 327, 346, 366, 387, 408, 430,
        452, 475, 499, 523, 547, 573, 598, 625, 651, 679, 707, 735, 765, 794,
        824, 855, 887, 919, 951, 984, 1018,
    ],
    // 3.9 m
    [
        44, 52, 60, 69, 78, 89, 99, 111, 123, 135, 148, 162, 176, 191,
        207, 223, 240, 258, 276, 294, 314, 334, 354, 375, 397, 419, 442, 466,
        490, 515, 540, 566, 593, 620, 648, 677, 706, 735, 766, 797, 828, 860,
        893, 927, 961, 995, 1030, 1066, 1103,
    ],
    // 4.2 m
    [
        48, 56, 65, 74, 84, 95, 107, 119, 132, 145, 160, 174, 190, 206,
        223, 240, 259, 277, 297, 317, 338, 359, 381, 404, 428, 452, 476, 502,
        528, 555, 582, 610, 639, 668, 698, 729, 760, 792, 825, 858, 892, 927,
        962, 998, 1034, 1072, 1110, 1148, 1188,
    ],
    // 4.5 m
    [
        51, 60, 69, 80, 90, 102, 115, 128, 141, 156, 171, 187, 204, 221,
        239, 258, 277, 297, 318, 340, 362, 385, 409, 433, 458, 484, 510, 538,
        565, 594, 623, 653, 684, 716, 748, 781, 814, 849, 884, 919, 956, 993,
        1031, 1069, 1108, 1148, 1189, 1230, 1272,
    ],
    // 4.8 m
    [
        54, 64, 74, 85, 97, 109, 122, 136, 151, 166, 182, 199, 217, 236,
        255, 275, 296, 317, 339, 362, 386, 411, 436, 462, 489, 516, 544, 573,
        603, 634, 665, 697, 730, 763, 798, 833, 869, 905, 942, 981, 1019, 1059,
        1099, 1140, 1182, 1225, 1268, 1312, 1357,
    ],
    // 5.1 m
    [
        58, 68, 79, 90, 103, 116, 130, 145, 160, 177, 194, 212, 231, 250,
        271, 292, 314, 337, 360, 385, 410, 436, 463, 491, 519, 548, 578, 609,
        641, 673, 707, 741, 775, 811, 848, 885, 923, 962, 1001, 1042, 1083, 1125,
        1168, 1212, 1256, 1301, 1347, 1394, 1442,
    ],
    // 5.4 m
    [
        61, 72, 83, 95, 109, 123, 137, 153, 170, 187, 205, 224, 244, 265,
        287, 309, 333, 357, 382, 408, 434, 462, 490, 520, 550, 581, 612, 645,
        679, 713, 748, 784, 821, 859, 897, 937, 977, 1018, 1060, 1103, 1147, 1191,
        1237, 1283, 1330, 1378, 1427, 1476, 1527,
    ],
    // 5.7 m
    [
        64, 76, 88, 101, 115, 129, 145, 162, 179, 197, 217, 237, 258, 280,
        303, 326, 351, 376, 403, 430, 458, 488, 518, 548, 580, 613, 646, 681,
        716, 753, 790, 828, 867, 907, 947, 989, 1031, 1075, 1119, 1164, 1211, 1258,
        1305, 1354, 1404, 1455, 1506, 1558, 1612,
    ],
    // 6.0 m
    [
        68, 80, 92, 106, 121, 136, 153, 170, 188, 208, 228, 249, 271, 295,
        319, 344, 369, 396, 424, 453, 483, 513, 545, 577, 611, 645, 680, 717,
        754, 792, 831, 871, 912, 954, 997, 1041, 1086, 1131, 1178, 1226, 1274, 1324,
        1374, 1425, 1478, 1531, 1585, 1640, 1696,
    ],
    // 6.3 m
    [
        71, 84, 97, 111, 127, 143, 160, 179, 198, 218, 239, 262, 285, 309,
        334, 361, 388, 416, 445, 476, 507, 539, 572, 606, 641, 677, 714, 753,
        792, 832, 873, 915, 958, 1002, 1047, 1093, 1140, 1188, 1237, 1287, 1338, 1390,
        1443, 1497, 1552, 1608, 1665, 1722, 1781,
    ],
    // 6.6 m
    [
        75, 88, 102, 117, 133, 150, 168, 187, 207, 229, 251, 274, 299, 324,
        350, 378, 406, 436, 467, 498, 531, 564, 599, 635, 672, 710, 749, 788,
        829, 871, 914, 958, 1004, 1050, 1097, 1145, 1194, 1245, 1296, 1348, 1402, 1456,
        1512, 1568, 1626, 1684, 1744, 1804, 1866,
    ],
];
